//! The calculator screen.
//!
//! All three panels are on one scrollable screen. Every keystroke in an
//! input goes through the session; a rejected edit puts the stored text
//! back, and every edit redraws all result cells.

use cursive::Cursive;
use cursive::event::Event;
use cursive::theme::{BaseColor, Color, ColorStyle};
use cursive::utils::markup::StyledString;
use cursive::view::{Nameable, Resizable, Scrollable};
use cursive::views::{DummyView, EditView, LinearLayout, ListView, Panel, TextView};
use invest_core::InputField;
use tracing::info;

use super::status_bar::{build_status_bar, hints};
use crate::panels::{PanelKind, ResultCell, Tone, field_caption, field_view_name};
use crate::state::AppState;

const FIELD_WIDTH: usize = 16;

fn results_view_name(kind: PanelKind) -> String {
    format!("results.{}", kind.key())
}

/// Display the calculator and register its global shortcuts.
pub fn show_calculator(siv: &mut Cursive) {
    let state = siv
        .user_data::<AppState>()
        .cloned()
        .unwrap_or_else(|| AppState::new("¥"));

    let mut panels = LinearLayout::vertical();
    for kind in PanelKind::ALL {
        panels.add_child(build_panel(kind, &state));
    }

    let status = build_status_bar(&[
        hints::TAB,
        hints::SHIFT_TAB,
        hints::CTRL_R,
        hints::CTRL_Q,
    ]);

    let layout = LinearLayout::vertical()
        .child(panels.scrollable().full_height())
        .child(status);

    siv.add_fullscreen_layer(Panel::new(layout).title("Restaurant Investment Calculator"));
    siv.add_global_callback(Event::CtrlChar('q'), Cursive::quit);
    siv.add_global_callback(Event::CtrlChar('r'), on_clear);

    recalculate(siv);
}

fn build_panel(
    kind: PanelKind,
    state: &AppState,
) -> Panel<LinearLayout> {
    let mut list = ListView::new();
    for field in kind.fields() {
        let edit = EditView::new()
            .content(state.session.value(field))
            .on_edit(move |s, text, _| on_field_edit(s, field, text))
            .with_name(field_view_name(field))
            .fixed_width(FIELD_WIDTH);
        list.add_child(&field_caption(field, &state.currency), edit);
    }

    let results = TextView::new("").with_name(results_view_name(kind));

    let body = LinearLayout::vertical()
        .child(list)
        .child(DummyView.fixed_height(1))
        .child(results);

    Panel::new(body).title(kind.title())
}

fn on_field_edit(
    siv: &mut Cursive,
    field: InputField,
    text: &str,
) {
    let restore = siv
        .with_user_data(|state: &mut AppState| {
            let accepted = state.session.update_field(field, text).is_accepted();
            (!accepted).then(|| state.session.value(field).to_string())
        })
        .flatten();

    if let Some(stored) = restore {
        siv.call_on_name(&field_view_name(field), |view: &mut EditView| {
            // The returned callback would re-run on_edit with unchanged text.
            let _ = view.set_content(stored);
        });
    }

    recalculate(siv);
}

/// Recompute every panel's results from the session and redraw them.
fn recalculate(siv: &mut Cursive) {
    let Some(rendered) = siv.with_user_data(|state: &mut AppState| {
        PanelKind::ALL.map(|kind| (kind, render_results(&kind.results(&state.session))))
    }) else {
        return;
    };

    for (kind, text) in rendered {
        siv.call_on_name(&results_view_name(kind), |view: &mut TextView| {
            view.set_content(text)
        });
    }
}

fn on_clear(siv: &mut Cursive) {
    siv.with_user_data(|state: &mut AppState| state.clear());

    for field in PanelKind::ALL.iter().flat_map(|kind| kind.fields()) {
        siv.call_on_name(&field_view_name(field), |view: &mut EditView| {
            let _ = view.set_content("");
        });
    }

    info!("inputs cleared");
    recalculate(siv);
}

fn tone_style(tone: Tone) -> ColorStyle {
    let color = match tone {
        Tone::Accent(PanelKind::SetupCost) => Color::Light(BaseColor::Yellow),
        Tone::Accent(PanelKind::BreakEven) => Color::Light(BaseColor::Blue),
        Tone::Accent(PanelKind::ExistingStore) | Tone::Positive => Color::Dark(BaseColor::Green),
        Tone::Negative => Color::Dark(BaseColor::Red),
    };
    ColorStyle::front(color)
}

fn render_results(cells: &[ResultCell]) -> StyledString {
    let mut text = StyledString::new();
    for cell in cells {
        text.append_plain(format!("{:<26}", cell.label));
        text.append_styled(format!("{:>16}", cell.display_value()), tone_style(cell.tone));
        if let Some(subtext) = cell.subtext {
            text.append_plain(format!("  {subtext}"));
        }
        text.append_plain("\n");
    }
    text
}
