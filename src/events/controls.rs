use crate::audio::SoundDeck;
use crate::constants::*;
use crate::{dom, ui};
use ambience_core::{Mixer, Sound, Transition};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub mixer: Rc<RefCell<Mixer>>,
    pub deck: Rc<SoundDeck>,
}

#[inline]
fn slider_value(input: &web::HtmlInputElement) -> Option<u8> {
    input.value().trim().parse::<f64>().ok().map(|v| v.clamp(0.0, 100.0) as u8)
}

/// True when the click came from a volume slider inside a card.
fn from_volume_slider(ev: &web::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| {
            el.class_list().contains(SOUND_VOLUME_CLASS)
                || el
                    .closest(&format!(".{}", SOUND_VOLUME_CLASS))
                    .ok()
                    .flatten()
                    .is_some()
        })
        .unwrap_or(false)
}

pub fn toggle_sound(w: &ControlWiring, sound: Sound, card: &web::Element) {
    let mut mixer = w.mixer.borrow_mut();
    match mixer.toggle(sound) {
        Transition::Started => {
            w.deck.start(sound, mixer.effective_volume(sound));
            ui::set_active(card, true);
        }
        Transition::Stopped => {
            w.deck.stop(sound);
            ui::set_active(card, false);
        }
    }
    ui::update_transport(&w.document, mixer.is_playing());
}

/// Card clicks toggle the card's sound; the card's slider sets its volume.
pub fn wire_sound_controls(w: &ControlWiring) {
    for card in dom::query_all(&w.document, SOUND_CONTROL_SELECTOR) {
        let Some(sound) = card
            .get_attribute("data-sound")
            .and_then(|n| Sound::from_name(&n))
        else {
            log::warn!("[ui] sound control without a known data-sound");
            continue;
        };
        wire_card_click(w, sound, &card);
        wire_card_slider(w, sound, &card);
    }
}

fn wire_card_click(w: &ControlWiring, sound: Sound, card: &web::Element) {
    let w = w.clone();
    let card_inner = card.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if from_volume_slider(&ev) {
            return;
        }
        toggle_sound(&w, sound, &card_inner);
    }) as Box<dyn FnMut(_)>);
    _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_card_slider(w: &ControlWiring, sound: Sound, card: &web::Element) {
    let Some(slider) = card
        .query_selector(&format!(".{}", SOUND_VOLUME_CLASS))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };

    let w = w.clone();
    let slider_inner = slider.clone();
    let on_input = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.stop_propagation();
        if let Some(volume) = slider_value(&slider_inner) {
            if let Some(effective) = w.mixer.borrow_mut().set_volume(sound, volume) {
                w.deck.set_volume(sound, effective);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();

    let on_click = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.stop_propagation();
    }) as Box<dyn FnMut(_)>);
    _ = slider.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Master slider: updates the readout and every active sound's volume.
pub fn wire_master_volume(w: &ControlWiring, slider: &web::HtmlInputElement) {
    if let Some(v) = slider_value(slider) {
        w.mixer.borrow_mut().set_master(v);
    }
    ui::set_master_readout(&w.document, w.mixer.borrow().master());

    let w = w.clone();
    let slider_inner = slider.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(v) = slider_value(&slider_inner) else {
            return;
        };
        let mut mixer = w.mixer.borrow_mut();
        mixer.set_master(v);
        ui::set_master_readout(&w.document, mixer.master());
        w.deck.sync_volumes(&mixer);
    }) as Box<dyn FnMut()>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_transport(w: &ControlWiring) {
    let play = w.clone();
    dom::add_click_listener(&w.document, PLAY_BUTTON_ID, move || {
        let mut mixer = play.mixer.borrow_mut();
        mixer.play_all();
        play.deck.play_active(&mixer);
        ui::update_transport(&play.document, mixer.is_playing());
        log::info!("[audio] play all");
    });

    let pause = w.clone();
    dom::add_click_listener(&w.document, PAUSE_BUTTON_ID, move || {
        let mut mixer = pause.mixer.borrow_mut();
        mixer.pause_all();
        pause.deck.pause_all();
        ui::update_transport(&pause.document, mixer.is_playing());
        log::info!("[audio] pause all");
    });
}
