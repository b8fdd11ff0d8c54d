//! Built-in Lua vocabulary offered by the autocomplete popup
//!
//! The catalog is plain static data: reserved words, global functions, the
//! commonly used `string`/`table`/`math`/`os` library functions and a handful
//! of global values. Order matters, since matching catalog entries are shown
//! in declaration order ahead of user identifiers.

use egui::Color32;

/// Display category of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateCategory {
    /// Callable: `print`, `string.format`, ...
    Function,
    /// Reserved word or literal: `local`, `nil`, `true`, ...
    Keyword,
    /// Global value or user defined variable
    VariableLike,
}

impl CandidateCategory {
    /// Glyph shown at the start of a popup row
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Function => "ƒ",
            Self::Keyword => "⚡",
            Self::VariableLike => "x",
        }
    }

    /// Label shown at the end of a popup row
    pub fn label(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Keyword => "keyword",
            Self::VariableLike => "variable",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Self::Function => Color32::from_rgb(86, 156, 214), // Blue
            Self::Keyword => Color32::from_rgb(197, 134, 192), // Purple
            Self::VariableLike => Color32::from_rgb(181, 206, 168), // Green
        }
    }
}

/// A built-in symbol of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub text: &'static str,
    pub category: CandidateCategory,
    pub description: Option<&'static str>,
}

const fn keyword(text: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        text,
        category: CandidateCategory::Keyword,
        description: Some(description),
    }
}

const fn function(text: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        text,
        category: CandidateCategory::Function,
        description: Some(description),
    }
}

const fn value(text: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        text,
        category: CandidateCategory::VariableLike,
        description: Some(description),
    }
}

/// The keyword catalog, in display order
pub static CATALOG: &[CatalogEntry] = &[
    // === Keywords ===
    keyword("local", "Declare a local variable"),
    keyword("function", "Declare a function"),
    keyword("if", "Conditional statement"),
    keyword("then", "Begin the body of an if branch"),
    keyword("else", "Fallback branch of an if statement"),
    keyword("elseif", "Additional conditional branch"),
    keyword("end", "Close a block"),
    keyword("for", "Numeric or generic loop"),
    keyword("in", "Iterator clause of a generic for loop"),
    keyword("while", "Loop while a condition holds"),
    keyword("do", "Begin a block"),
    keyword("repeat", "Loop until a condition holds"),
    keyword("until", "Condition of a repeat loop"),
    keyword("return", "Return from a function"),
    keyword("break", "Exit the innermost loop"),
    keyword("goto", "Jump to a label"),
    keyword("and", "Logical and"),
    keyword("or", "Logical or"),
    keyword("not", "Logical negation"),
    keyword("nil", "The absence of a value"),
    keyword("true", "Boolean true"),
    keyword("false", "Boolean false"),
    // === Global functions ===
    function("print", "Print values to the console"),
    function("pairs", "Iterate over all key-value pairs of a table"),
    function("ipairs", "Iterate over the array part of a table"),
    function("type", "Name of the type of a value"),
    function("tostring", "Convert a value to a string"),
    function("tonumber", "Convert a value to a number"),
    function("require", "Load a module"),
    function("error", "Raise an error"),
    function("assert", "Raise an error if a value is false or nil"),
    function("pcall", "Call a function in protected mode"),
    function("xpcall", "Call a function in protected mode with a message handler"),
    function("select", "Select arguments from a vararg list"),
    function("next", "Next key-value pair of a table"),
    function("setmetatable", "Set the metatable of a table"),
    function("getmetatable", "Get the metatable of a value"),
    function("rawget", "Get a table field without metamethods"),
    function("rawset", "Set a table field without metamethods"),
    function("rawequal", "Compare values without metamethods"),
    function("rawlen", "Length of a value without metamethods"),
    // === String library ===
    function("string.format", "Format values into a string"),
    function("string.sub", "Extract a substring"),
    function("string.len", "Length of a string"),
    function("string.upper", "Convert a string to upper case"),
    function("string.lower", "Convert a string to lower case"),
    function("string.find", "Find a pattern in a string"),
    function("string.match", "Match a pattern against a string"),
    function("string.gmatch", "Iterate over pattern matches"),
    function("string.gsub", "Replace pattern matches"),
    function("string.rep", "Repeat a string"),
    function("string.reverse", "Reverse a string"),
    function("string.byte", "Character codes of a string"),
    function("string.char", "String from character codes"),
    // === Table library ===
    function("table.insert", "Insert an element into a list"),
    function("table.remove", "Remove an element from a list"),
    function("table.concat", "Join list elements into a string"),
    function("table.sort", "Sort a list in place"),
    function("table.unpack", "Return list elements as multiple values"),
    function("table.pack", "Pack arguments into a table"),
    // === Math library ===
    function("math.floor", "Round down to an integer"),
    function("math.ceil", "Round up to an integer"),
    function("math.abs", "Absolute value"),
    function("math.max", "Largest argument"),
    function("math.min", "Smallest argument"),
    function("math.sqrt", "Square root"),
    function("math.random", "Pseudo-random number"),
    function("math.randomseed", "Seed the pseudo-random generator"),
    function("math.fmod", "Remainder of a division"),
    function("math.tointeger", "Convert a float to an integer if exact"),
    value("math.pi", "The value of pi"),
    value("math.huge", "Positive infinity"),
    // === OS library ===
    function("os.time", "Current time"),
    function("os.clock", "CPU time used by the program"),
    function("os.date", "Format a date"),
    // === Global values ===
    value("_G", "The global environment"),
    value("_VERSION", "The running Lua version"),
    value("self", "Receiver of a method call"),
];

/// Whether `word` is a reserved word and can never name a variable
pub fn is_reserved(word: &str) -> bool {
    CATALOG
        .iter()
        .any(|entry| entry.category == CandidateCategory::Keyword && entry.text == word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entries_unique_by_text() {
        let mut seen = HashSet::new();
        for entry in CATALOG {
            assert!(seen.insert(entry.text), "duplicate entry {}", entry.text);
        }
    }

    #[test]
    fn test_catalog_covers_categories() {
        assert!(CATALOG
            .iter()
            .any(|e| e.category == CandidateCategory::Keyword));
        assert!(CATALOG
            .iter()
            .any(|e| e.category == CandidateCategory::Function));
        assert!(CATALOG
            .iter()
            .any(|e| e.category == CandidateCategory::VariableLike));
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved("local"));
        assert!(is_reserved("function"));
        assert!(is_reserved("nil"));
        assert!(!is_reserved("print"));
        assert!(!is_reserved("counter"));
    }

    #[test]
    fn test_category_presentation() {
        assert_eq!(CandidateCategory::Function.glyph(), "ƒ");
        assert_eq!(CandidateCategory::Keyword.label(), "keyword");
        assert_eq!(CandidateCategory::VariableLike.label(), "variable");
    }
}
