//! Floating suggestion list
//!
//! The popup is stateless: it draws the candidates it is given at the anchor
//! point and reports what the user did with the pointer. Keyboard handling
//! and hit-testing decisions stay with the caller, which forwards them to the
//! [`AutocompleteController`](crate::autocomplete::AutocompleteController).

use egui::{Color32, Id, Rect, RichText, Sense};

use crate::autocomplete::{Candidate, NavigationState, Point};

/// Pointer interaction reported by the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    /// A row was clicked
    Select(usize),
    /// The pointer was pressed outside the popup
    Close,
}

/// What the popup drew and what the pointer did
#[derive(Debug, Clone, Copy)]
pub struct PopupOutput {
    /// Bounding box of the rendered popup
    pub rect: Rect,
    pub event: Option<PopupEvent>,
}

/// Suggestion popup widget
pub struct SuggestionPopup<'a> {
    id: Id,
    candidates: &'a [Candidate],
    selected: usize,
    anchor: Point,
}

impl<'a> SuggestionPopup<'a> {
    pub fn new(id: Id, candidates: &'a [Candidate], selected: usize, anchor: Point) -> Self {
        Self {
            id,
            candidates,
            selected,
            anchor,
        }
    }

    /// Popup for an open state; `None` while closed
    pub fn from_state(id: Id, state: &'a NavigationState) -> Option<Self> {
        match state {
            NavigationState::Open {
                candidates,
                selected,
                anchor,
            } => Some(Self::new(id, candidates, *selected, *anchor)),
            NavigationState::Closed => None,
        }
    }

    /// Draw the popup; renders nothing for an empty list
    pub fn show(self, ctx: &egui::Context) -> Option<PopupOutput> {
        if self.candidates.is_empty() {
            return None;
        }

        let Self {
            id,
            candidates,
            selected,
            anchor,
        } = self;

        let area = egui::Area::new(id)
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::from(anchor))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.set_min_width(200.0);
                        ui.set_max_width(300.0);

                        let mut clicked = None;
                        egui::ScrollArea::vertical()
                            .max_height(192.0)
                            .show(ui, |ui| {
                                for (i, candidate) in candidates.iter().enumerate() {
                                    if render_row(ui, candidate, i == selected) {
                                        clicked = Some(i);
                                    }
                                }
                            });
                        clicked
                    })
                    .inner
            });

        let rect = area.response.rect;
        let event = match area.inner {
            Some(index) => Some(PopupEvent::Select(index)),
            None if pressed_outside(ctx, rect) => Some(PopupEvent::Close),
            None => None,
        };

        Some(PopupOutput { rect, event })
    }
}

/// One candidate row; returns true when clicked
fn render_row(ui: &mut egui::Ui, candidate: &Candidate, is_selected: bool) -> bool {
    let fill = if is_selected {
        ui.visuals().selection.bg_fill
    } else {
        Color32::TRANSPARENT
    };
    let text_color = if is_selected {
        ui.visuals().strong_text_color()
    } else {
        ui.visuals().text_color()
    };

    let row = egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let category = candidate.category;
                ui.label(
                    RichText::new(category.glyph())
                        .strong()
                        .color(category.color()),
                );
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&*candidate.text)
                            .monospace()
                            .color(text_color),
                    );
                    if let Some(description) = &candidate.description {
                        ui.label(
                            RichText::new(&**description)
                                .small()
                                .color(Color32::GRAY),
                        );
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(category.label()).small().color(Color32::GRAY));
                });
            });
        })
        .response
        .interact(Sense::click());

    if is_selected {
        row.scroll_to_me(None);
    }
    row.clicked()
}

/// Whether a pointer press this frame started outside `rect`
fn pressed_outside(ctx: &egui::Context, rect: Rect) -> bool {
    ctx.input(|i| {
        i.pointer.any_pressed()
            && i
                .pointer
                .press_origin()
                .is_some_and(|pos| !rect.contains(pos))
    })
}
