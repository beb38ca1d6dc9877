//! CSS custom-property serializer.
//!
//! Projects a resolved settings tree into `--usertour-*` declarations for a
//! single surface, or for every surface when none is given (the theme list
//! thumbnail). Declarations are emitted in a fixed order, one per line, so
//! serializing the same tree twice is byte-identical.

mod surface;
mod writer;

pub use surface::SurfaceType;

use crate::resolve::resolve;
use crate::schema::{ButtonStyle, Placement, ThemeSettings};
use writer::TokenWriter;

/// Serialize already-resolved settings into style tokens.
///
/// Slots still holding `"Auto"` are written as `initial`; call
/// [`render_css`] to resolve and serialize in one step.
pub fn to_style_tokens(resolved: &ThemeSettings, surface: Option<SurfaceType>) -> String {
    let mut w = TokenWriter::default();
    write_base(&mut w, resolved);

    let wants = |s: SurfaceType| surface.is_none() || surface == Some(s);
    let popup = surface.is_none()
        || matches!(surface, Some(SurfaceType::Tooltip | SurfaceType::Modal));

    if wants(SurfaceType::Tooltip) {
        write_tooltip(&mut w, resolved);
    }
    if wants(SurfaceType::Modal) {
        write_modal(&mut w, resolved);
    }
    if popup {
        write_backdrop(&mut w, resolved);
        write_avatar(&mut w, resolved);
    }
    if wants(SurfaceType::Checklist) {
        write_checklist(&mut w, resolved);
    }
    if wants(SurfaceType::ChecklistLauncher) {
        write_checklist_launcher(&mut w, resolved);
    }
    if wants(SurfaceType::LauncherIcon) {
        write_launcher_icon(&mut w, resolved);
    }
    if wants(SurfaceType::LauncherBeacon) {
        write_launcher_beacon(&mut w, resolved);
    }
    if surface.is_none() || matches!(surface, Some(SurfaceType::Survey | SurfaceType::Nps)) {
        write_survey(&mut w, resolved);
    }

    w.finish()
}

/// Resolve `"Auto"` slots and serialize in one step.
pub fn render_css(settings: &ThemeSettings, surface: Option<SurfaceType>) -> String {
    to_style_tokens(&resolve(settings), surface)
}

fn write_base(w: &mut TokenWriter, s: &ThemeSettings) {
    w.color("background", &s.main_color.background);
    w.color("foreground-color", &s.main_color.color);
    w.slot("main-hover-background-color", &s.main_color.hover);
    w.slot("main-active-background-color", &s.main_color.active);
    w.color("brand-background-color", &s.brand_color.background);
    w.color("brand-foreground-color", &s.brand_color.color);
    w.slot("brand-hover-background-color", &s.brand_color.hover);
    w.slot("brand-active-background-color", &s.brand_color.active);

    let font = &s.font;
    w.raw("font-family", &font.font_family);
    w.px("font-size", font.font_size);
    w.px("line-height", font.line_height);
    w.raw("font-weight-normal", font.font_weight_normal);
    w.raw("font-weight-bold", font.font_weight_bold);
    w.px("h1-font-size", font.h1_font_size);
    w.px("h2-font-size", font.h2_font_size);
    w.slot("link-color", &font.link_color);

    let border = &s.border;
    w.px("border-radius", border.border_radius);
    let width = if border.border_width_enabled {
        border.border_width
    } else {
        0
    };
    w.px("border-width", width);
    w.slot("border-color", &border.border_color);

    let buttons = &s.buttons;
    w.px("button-height", buttons.height);
    w.px("button-min-width", buttons.min_width);
    w.px("button-px", buttons.px);
    w.px("button-border-radius", buttons.border_radius);
    write_button(w, "primary", &buttons.primary);
    write_button(w, "secondary", &buttons.secondary);

    w.slot("xbutton-color", &s.xbutton.color);

    let progress = &s.progress;
    w.raw(
        "progress-bar-display",
        if progress.enabled { "block" } else { "none" },
    );
    w.raw("progress-bar-type", progress.progress_type.as_str());
    w.slot("progress-bar-color", &progress.color);
    w.px("progress-bar-height", progress.height);
}

fn write_button(w: &mut TokenWriter, variant: &str, style: &ButtonStyle) {
    w.raw(&format!("{variant}-font-weight"), style.font_weight);
    w.slot(&format!("{variant}-text-color"), &style.text_color.color);
    w.slot(&format!("{variant}-hover-text-color"), &style.text_color.hover);
    w.slot(
        &format!("{variant}-active-text-color"),
        &style.text_color.active,
    );
    w.slot(
        &format!("{variant}-background-color"),
        &style.background_color.background,
    );
    w.slot(
        &format!("{variant}-hover-background-color"),
        &style.background_color.hover,
    );
    w.slot(
        &format!("{variant}-active-background-color"),
        &style.background_color.active,
    );
    let width = if style.border.enabled {
        style.border.border_width
    } else {
        0
    };
    w.px(&format!("{variant}-border-width"), width);
    w.slot(&format!("{variant}-border-color"), &style.border.color.color);
    w.slot(
        &format!("{variant}-hover-border-color"),
        &style.border.color.hover,
    );
    w.slot(
        &format!("{variant}-active-border-color"),
        &style.border.color.active,
    );
}

fn write_placement(w: &mut TokenWriter, prefix: &str, placement: &Placement) {
    w.raw(&format!("{prefix}-placement"), placement.position.as_css());
    w.px(
        &format!("{prefix}-position-offset-x"),
        placement.position_offset_x,
    );
    w.px(
        &format!("{prefix}-position-offset-y"),
        placement.position_offset_y,
    );
}

fn write_tooltip(w: &mut TokenWriter, s: &ThemeSettings) {
    w.px("tooltip-width", s.tooltip.width);
    w.px("tooltip-notch-size", s.tooltip.notch_size);
    w.px("focus-highlight-border-radius", s.focus_highlight.border_radius);
    w.px("focus-highlight-spread", s.focus_highlight.spread);
}

fn write_modal(w: &mut TokenWriter, s: &ThemeSettings) {
    w.px("modal-width", s.modal.width);
    w.px("modal-padding", s.modal.padding);
}

fn write_backdrop(w: &mut TokenWriter, s: &ThemeSettings) {
    let backdrop = &s.backdrop;
    w.color("backdrop-color", &backdrop.color);
    w.fraction("backdrop-opacity", backdrop.opacity);
    let highlight = &backdrop.highlight;
    let kind = match highlight.highlight_type {
        crate::schema::HighlightType::Inside => "inside",
        crate::schema::HighlightType::Outside => "outside",
    };
    w.raw("backdrop-highlight-type", kind);
    w.px("backdrop-highlight-radius", highlight.radius);
    w.px("backdrop-highlight-spread", highlight.spread);
    w.slot("backdrop-highlight-color", &highlight.color);
    w.fraction("backdrop-highlight-opacity", highlight.opacity);
}

fn write_avatar(w: &mut TokenWriter, s: &ThemeSettings) {
    w.px("avatar-size", s.avatar.size);
    w.px("bubble-width", s.bubble.width);
    write_placement(w, "bubble", &s.bubble.placement);
}

fn write_checklist(w: &mut TokenWriter, s: &ThemeSettings) {
    let checklist = &s.checklist;
    w.px("checklist-width", checklist.width);
    write_placement(w, "checklist", &checklist.placement);
    w.raw(
        "checklist-completed-task-text-decoration",
        &checklist.completed_task_text_decoration,
    );
    w.slot("checklist-checkmark-color", &checklist.checkmark_color);
}

fn write_checklist_launcher(w: &mut TokenWriter, s: &ThemeSettings) {
    let launcher = &s.checklist_launcher;
    w.px("checklist-launcher-border-radius", launcher.border_radius);
    w.px("checklist-launcher-height", launcher.height);
    w.raw("checklist-launcher-font-weight", launcher.font_weight);
    write_placement(w, "checklist-launcher", &launcher.placement);
    w.slot("checklist-launcher-color", &launcher.color.color);
    w.slot(
        "checklist-launcher-background-color",
        &launcher.color.background,
    );
    w.slot(
        "checklist-launcher-hover-background-color",
        &launcher.color.hover,
    );
    w.slot(
        "checklist-launcher-active-background-color",
        &launcher.color.active,
    );
    w.slot("checklist-launcher-counter-color", &launcher.counter.color);
    w.slot(
        "checklist-launcher-counter-background-color",
        &launcher.counter.background,
    );
}

fn write_launcher_icon(w: &mut TokenWriter, s: &ThemeSettings) {
    w.slot("launcher-icon-color", &s.launcher_icon.color);
    w.fraction("launcher-icon-opacity", s.launcher_icon.opacity);
    w.px("launcher-icon-size", s.launcher_icon.size);
}

fn write_launcher_beacon(w: &mut TokenWriter, s: &ThemeSettings) {
    w.slot("launcher-beacon-color", &s.launcher_beacon.color);
    w.px("launcher-beacon-size", s.launcher_beacon.size);
}

fn write_survey(w: &mut TokenWriter, s: &ThemeSettings) {
    w.slot("survey-color", &s.survey.color);
}
