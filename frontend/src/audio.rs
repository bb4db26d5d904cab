use std::collections::HashMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;

use crate::config::get_asset_url;

const SPIN_LOOP_SOUND: &str = "/sounds/wheel-spin.mp3";
const SPIN_INITIAL_PLAYBACK_RATE: f64 = 1.5;
const SPIN_INITIAL_VOLUME: f64 = 0.6;
const WINNER_OUTRO_VARIANTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Burst,
    SpinSuccess,
    Merge,
    StartOver,
    WinnerIntro,
}

impl AudioCue {
    const ALL: [AudioCue; 5] = [
        AudioCue::Burst,
        AudioCue::SpinSuccess,
        AudioCue::Merge,
        AudioCue::StartOver,
        AudioCue::WinnerIntro,
    ];

    fn path(&self) -> &'static str {
        match self {
            AudioCue::Burst => "/sounds/magic-burst.mp3",
            AudioCue::SpinSuccess => "/sounds/spin-success.mp3",
            AudioCue::Merge => "/sounds/merge-combo.mp3",
            AudioCue::StartOver => "/sounds/start-over.mp3",
            AudioCue::WinnerIntro => "/sounds/winner-fanfare.mp3",
        }
    }
}

fn load(path: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(&get_asset_url(path)) {
        Ok(audio) => Some(audio),
        Err(e) => {
            log::warn!("Failed to load audio {}: {:?}", path, e);
            None
        }
    }
}

fn restart(audio: &HtmlAudioElement, volume: f64) {
    let _ = audio.pause();
    audio.set_current_time(0.0);
    audio.set_volume(volume);
    // Autoplay may be blocked until the first user gesture
    let _ = audio.play();
}

/// Sound effects layered on top of the draw. Nothing here feeds back into the draw itself.
pub struct AudioBank {
    cues: HashMap<AudioCue, HtmlAudioElement>,
    spin_loop: Option<HtmlAudioElement>,
    winner_outro: Option<HtmlAudioElement>,
    on_intro_ended: Option<Closure<dyn FnMut()>>,
}

impl AudioBank {
    pub fn new() -> Self {
        let cues = AudioCue::ALL
            .iter()
            .filter_map(|cue| load(cue.path()).map(|audio| (*cue, audio)))
            .collect();
        let spin_loop = load(SPIN_LOOP_SOUND);
        if let Some(audio) = &spin_loop {
            audio.set_loop(true);
            audio.set_volume(SPIN_INITIAL_VOLUME);
        }
        Self {
            cues,
            spin_loop,
            winner_outro: None,
            on_intro_ended: None,
        }
    }

    pub fn play(&self, cue: AudioCue, volume: f64) {
        if let Some(audio) = self.cues.get(&cue) {
            restart(audio, volume);
        }
    }

    pub fn start_spin_loop(&self) {
        if let Some(audio) = &self.spin_loop {
            audio.set_playback_rate(SPIN_INITIAL_PLAYBACK_RATE);
            restart(audio, SPIN_INITIAL_VOLUME);
        }
    }

    /// Follows the wheel: fast and loud right after launch, slow and soft near the stop.
    pub fn sync_spin(&self, progress: f64) {
        if let Some(audio) = &self.spin_loop {
            let speed = progress.clamp(0.0, 1.0);
            audio.set_playback_rate(0.5 + speed * 1.2);
            audio.set_volume(0.15 + speed * 0.45);
        }
    }

    pub fn stop_spin_loop(&self) {
        if let Some(audio) = &self.spin_loop {
            let _ = audio.pause();
            audio.set_current_time(0.0);
        }
    }

    /// Fanfare, then one of the congratulation outros picked by how many draws came before.
    pub fn play_winner_sequence(&mut self, drawn_count: usize) {
        let Some(intro) = self.cues.get(&AudioCue::WinnerIntro).cloned() else {
            return;
        };
        let index = drawn_count % WINNER_OUTRO_VARIANTS + 1;
        let outro = load(&format!("/sounds/congratulation/success-{}.mp3", index));

        let on_ended = outro.clone().map(|outro| {
            Closure::wrap(Box::new(move || {
                outro.set_volume(0.3);
                let _ = outro.play();
            }) as Box<dyn FnMut()>)
        });
        intro.set_onended(on_ended.as_ref().map(|closure| closure.as_ref().unchecked_ref()));
        restart(&intro, 0.35);

        self.winner_outro = outro;
        self.on_intro_ended = on_ended;
    }

    pub fn stop_winner_sequence(&mut self) {
        if let Some(intro) = self.cues.get(&AudioCue::WinnerIntro) {
            let _ = intro.pause();
            intro.set_current_time(0.0);
            intro.set_onended(None);
        }
        if let Some(outro) = self.winner_outro.take() {
            let _ = outro.pause();
            outro.set_current_time(0.0);
        }
        self.on_intro_ended = None;
    }

    pub fn pause_all(&mut self) {
        self.stop_spin_loop();
        self.stop_winner_sequence();
        for audio in self.cues.values() {
            let _ = audio.pause();
        }
    }
}

impl Default for AudioBank {
    fn default() -> Self {
        Self::new()
    }
}
