use crate::constants::*;
use ambience_core::AmbientColor;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
}

#[inline]
pub fn set_active(el: &web::Element, active: bool) {
    let cl = el.class_list();
    if active {
        _ = cl.add_1(ACTIVE_CLASS);
    } else {
        _ = cl.remove_1(ACTIVE_CLASS);
    }
}

/// Only one of play/pause is visible: pause while playing, play otherwise.
pub fn update_transport(document: &web::Document, playing: bool) {
    let play = document.get_element_by_id(PLAY_BUTTON_ID);
    let pause = document.get_element_by_id(PAUSE_BUTTON_ID);
    if let (Some(play), Some(pause)) = (play, pause) {
        if playing {
            hide(&play);
            show(&pause);
        } else {
            show(&play);
            hide(&pause);
        }
    }
}

pub fn set_master_readout(document: &web::Document, value: u8) {
    if let Some(el) = document.get_element_by_id(MASTER_VOLUME_READOUT_ID) {
        el.set_text_content(Some(&value.to_string()));
    }
}

/// Glow the adapt button in the current ambient hue.
pub fn paint_adapt_button(button: &web::HtmlElement, ambient: &AmbientColor) {
    let color = format!(
        "hsl({}, {}%, {}%)",
        ambient.h, ADAPT_BUTTON_SATURATION, ADAPT_BUTTON_LIGHTNESS
    );
    let style = button.style();
    _ = style.set_property("background-color", &color);
    _ = style.set_property(
        "box-shadow",
        &format!("0 0 {}px {}", ADAPT_BUTTON_GLOW_PX, color),
    );
    _ = style.set_property("color", "#fff");
    _ = style.set_property("border", "2px solid white");
}

pub fn reset_adapt_button(button: &web::HtmlElement) {
    let style = button.style();
    _ = style.set_property("background-color", ADAPT_BUTTON_IDLE_BACKGROUND);
    _ = style.set_property("box-shadow", "none");
    _ = style.set_property("color", ADAPT_BUTTON_IDLE_TEXT);
    _ = style.set_property("border", ADAPT_BUTTON_IDLE_BORDER);
}
