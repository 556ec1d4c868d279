// Host-side tests for the per-frame scene, driven through a recording surface.

use ambience_core::layers::{FireLayer, NightLayer, SceneContext, ThunderLayer, WavesLayer};
use ambience_core::particles::{FireParticle, StarParticle};
use ambience_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Fill(Color),
    Stroke(Color),
    LineWidth(f32),
    LineCap(LineCap),
    Composite(Composite),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    ClosePath,
    Arc(f32, f32, f32),
    FillPath,
    StrokePath,
    FillRect(f32, f32, f32, f32),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    /// Operations that put pixels on the surface.
    fn draws(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::FillPath | Op::StrokePath | Op::FillRect(..)))
            .count()
    }

    fn position(&self, wanted: &Op) -> Option<usize> {
        self.ops.iter().position(|op| op == wanted)
    }
}

impl Surface for Recorder {
    fn set_fill(&mut self, color: Color) {
        self.ops.push(Op::Fill(color));
    }
    fn set_stroke(&mut self, color: Color) {
        self.ops.push(Op::Stroke(color));
    }
    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(Op::LineCap(cap));
    }
    fn set_composite(&mut self, mode: Composite) {
        self.ops.push(Op::Composite(mode));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn arc(&mut self, x: f32, y: f32, radius: f32, _start: f32, _end: f32) {
        self.ops.push(Op::Arc(x, y, radius));
    }
    fn fill(&mut self) {
        self.ops.push(Op::FillPath);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::StrokePath);
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }
}

struct FixedProbe {
    color: Option<Rgb>,
    calls: usize,
}

impl ColorProbe for FixedProbe {
    fn sample(&mut self) -> Option<Rgb> {
        self.calls += 1;
        self.color
    }
}

const VIEW: Viewport = Viewport::new(320.0, 240.0);

fn scene() -> Scene<StdRng> {
    Scene::new(&EngineConfig::default(), VIEW, StdRng::seed_from_u64(42))
}

fn all_on() -> ToggleFlags {
    ToggleFlags {
        rain: true,
        fire: true,
        thunder: true,
        night: true,
        waves: true,
        color_adapt: false,
    }
}

#[test]
fn idle_frame_only_fades_the_background() {
    let mut scene = scene();
    let mut surface = Recorder::default();
    let report = scene.frame(&mut surface, &mut NoCamera, VIEW, &ToggleFlags::default());
    assert_eq!(surface.draws(), 1);
    assert_eq!(
        surface.ops,
        vec![
            Op::Fill(Color::rgba([25, 24, 24], 0.25)),
            Op::FillRect(0.0, 0.0, 320.0, 240.0),
        ]
    );
    assert_eq!(report.layers_drawn, 0);
    assert_eq!(report.ambient, None);
}

#[test]
fn layers_draw_in_fixed_order() {
    let mut scene = scene();
    let mut surface = Recorder::default();
    let report = scene.frame(&mut surface, &mut NoCamera, VIEW, &all_on());
    assert_eq!(report.layers_drawn, 5);

    assert_eq!(surface.ops[1], Op::FillRect(0.0, 0.0, 320.0, 240.0));
    let rain = surface
        .position(&Op::Stroke(Color::rgba([174, 194, 224], 0.5)))
        .expect("rain stroke");
    let fire = surface
        .position(&Op::Composite(Composite::Lighter))
        .expect("fire composite");
    let restored = surface
        .position(&Op::Composite(Composite::SourceOver))
        .expect("composite restored");
    let waves = surface
        .position(&Op::Fill(Color::rgba([50, 100, 200], 0.4)))
        .expect("first wave band");
    assert!(rain < fire);
    assert!(fire < restored);
    assert!(restored < waves);

    // stars are white and drawn between fire and waves
    let star = surface.ops[restored..waves]
        .iter()
        .any(|op| matches!(op, Op::Fill(Color::Rgba([255, 255, 255], _))));
    assert!(star);
}

#[test]
fn fire_layer_restores_normal_compositing() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut fire = FireLayer::new(10, VIEW, &mut rng);
    let mut surface = Recorder::default();
    let ctx = SceneContext {
        viewport: VIEW,
        ambient: None,
    };
    fire.draw(&mut surface, &ctx, &mut rng);
    assert_eq!(surface.ops.first(), Some(&Op::Composite(Composite::Lighter)));
    assert_eq!(surface.ops.last(), Some(&Op::Composite(Composite::SourceOver)));
    assert_eq!(surface.draws(), 10);
}

#[test]
fn every_ember_is_recycled_within_a_hundred_frames() {
    let mut scene = scene();
    let mut surface = Recorder::default();
    let flags = ToggleFlags {
        fire: true,
        ..ToggleFlags::default()
    };
    for _ in 0..100 {
        scene.frame(&mut surface, &mut NoCamera, VIEW, &flags);
        surface.ops.clear();
    }
    let fire = scene.fire().expect("fire layer");
    assert_eq!(fire.embers.len(), 150);
    for ember in fire.embers.iter() {
        assert!(ember.age < 100, "ember never respawned (age {})", ember.age);
        assert!(ember.opacity > 0.0 && ember.opacity <= 1.0);
    }
}

#[test]
fn lightning_fades_out_after_exactly_25_steps() {
    let mut thunder = ThunderLayer::new();
    thunder.trigger();
    for step in 1..=24 {
        thunder.decay();
        assert!(thunder.opacity > 0.0, "flash ended early at step {step}");
    }
    thunder.decay();
    assert!(thunder.opacity <= 0.0);
}

#[test]
fn triggered_flash_paints_the_whole_viewport_while_decaying() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut thunder = ThunderLayer::new();
    thunder.trigger();
    let ctx = SceneContext {
        viewport: VIEW,
        ambient: None,
    };
    let mut surface = Recorder::default();
    for _ in 0..25 {
        thunder.draw(&mut surface, &ctx, &mut rng);
    }
    assert_eq!(surface.draws(), 25);
    assert_eq!(surface.ops[0], Op::Fill(Color::rgba([200, 220, 255], 1.0)));
    assert_eq!(surface.ops[1], Op::FillRect(0.0, 0.0, 320.0, 240.0));
    assert!(!thunder.is_flashing());
}

#[test]
fn missing_capabilities_are_never_drawn() {
    let config = EngineConfig {
        capabilities: Capabilities::none().with(Channel::Rain),
        ..EngineConfig::default()
    };
    let mut scene = Scene::new(&config, VIEW, StdRng::seed_from_u64(5));
    assert_eq!(scene.capabilities(), Capabilities::none().with(Channel::Rain));
    assert!(scene.fire().is_none());
    assert!(scene.night().is_none());
    assert!(scene.waves().is_none());

    let mut probe = FixedProbe {
        color: Some(Rgb::new(255, 0, 0)),
        calls: 0,
    };
    let flags = ToggleFlags {
        color_adapt: true,
        ..all_on()
    };
    let mut surface = Recorder::default();
    let report = scene.frame(&mut surface, &mut probe, VIEW, &flags);
    assert_eq!(report.layers_drawn, 1);
    assert_eq!(probe.calls, 0);
    assert_eq!(report.ambient, None);
    assert_eq!(surface.draws(), 1 + 100);
}

#[test]
fn adaptation_samples_and_tints_every_layer() {
    let mut scene = scene();
    let mut probe = FixedProbe {
        color: Some(Rgb::new(255, 0, 0)),
        calls: 0,
    };
    let flags = ToggleFlags {
        color_adapt: true,
        ..all_on()
    };
    let mut surface = Recorder::default();
    let report = scene.frame(&mut surface, &mut probe, VIEW, &flags);
    assert_eq!(probe.calls, 1);
    assert!(report.sampled);
    assert_eq!(report.layers_drawn, 5);
    let ambient = report.ambient.expect("adapting");
    // 220 -> 5% of the way to 0
    assert!((ambient.h - 209.0).abs() < 1e-3);

    // background
    assert!(matches!(surface.ops[0], Op::Fill(Color::Hsla { h, s, l, .. })
        if h == ambient.h && s == 30.0 && l == 5.0));
    // rain
    assert!(surface.ops.iter().any(|op| matches!(op, Op::Stroke(Color::Hsla { h, a, .. })
        if *h == ambient.h && *a == 0.5)));

    let lighter = surface.position(&Op::Composite(Composite::Lighter)).expect("fire drawn");
    let restored = surface
        .position(&Op::Composite(Composite::SourceOver))
        .expect("compositing restored");
    let fills: Vec<(usize, Color)> = surface
        .ops
        .iter()
        .enumerate()
        .filter_map(|(i, op)| match op {
            Op::Fill(c) => Some((i, *c)),
            _ => None,
        })
        .collect();

    // fire: ambient hue plus each ember's offset
    let embers: Vec<Color> = fills
        .iter()
        .filter(|(i, _)| *i > lighter && *i < restored)
        .map(|(_, c)| *c)
        .collect();
    assert_eq!(embers.len(), 150);
    for c in embers {
        let Color::Hsla { h, s, l, .. } = c else {
            panic!("ember not tinted: {c}");
        };
        assert_eq!((s, l), (100.0, 50.0));
        assert!((h - ambient.h).abs() <= 15.0 + 1e-3, "ember hue {h}");
    }

    // everything after fire: thunder (if it flashed), stars, waves
    let after: Vec<Color> = fills
        .iter()
        .filter(|(i, _)| *i > restored)
        .map(|(_, c)| *c)
        .collect();
    for c in &after {
        let Color::Hsla { h, .. } = *c else {
            panic!("layer not tinted: {c}");
        };
        assert_eq!(h, ambient.h);
    }
    let stars = after
        .iter()
        .filter(|c| matches!(c, Color::Hsla { s, l, .. } if *s == 50.0 && *l == 90.0))
        .count();
    assert_eq!(stars, 150);
    let bands: Vec<(f32, f32, f32)> = after[after.len() - 3..]
        .iter()
        .map(|c| match *c {
            Color::Hsla { s, l, a, .. } => (s, l, a),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(
        bands,
        vec![(60.0, 50.0, 0.4), (60.0, 45.0, 0.3), (60.0, 40.0, 0.2)]
    );
}

#[test]
fn layer_colors_follow_the_ambient_hue() {
    let ambient = AmbientColor {
        h: 140.0,
        s: 0.7,
        l: 0.6,
    };
    let tinted = SceneContext {
        viewport: VIEW,
        ambient: Some(ambient),
    };
    let plain = SceneContext {
        viewport: VIEW,
        ambient: None,
    };

    let ember = FireParticle {
        pos: Vec2::new(10.0, 200.0),
        radius: 3.0,
        rise: 2.0,
        drift: 0.0,
        hue_offset: -10.0,
        opacity: 0.8,
        age: 0,
    };
    assert_eq!(
        FireLayer::ember_color(&ember, &tinted),
        Color::hsla(130.0, 100.0, 50.0, 0.8)
    );
    assert_eq!(
        FireLayer::ember_color(&ember, &plain),
        Color::hsla(15.0, 100.0, 50.0, 0.8)
    );

    let mut thunder = ThunderLayer::new();
    thunder.trigger();
    assert_eq!(
        thunder.flash_color(&tinted),
        Color::hsla(140.0, 100.0, 90.0, 1.0)
    );
    assert_eq!(
        thunder.flash_color(&plain),
        Color::rgba([200, 220, 255], 1.0)
    );

    let star = StarParticle {
        pos: Vec2::new(5.0, 5.0),
        radius: 1.0,
        opacity: 0.4,
        fade_speed: 0.01,
        fading_in: true,
    };
    assert_eq!(
        NightLayer::star_color(&star, &tinted),
        Color::hsla(140.0, 50.0, 90.0, 0.4)
    );
    assert_eq!(
        NightLayer::star_color(&star, &plain),
        Color::rgba([255, 255, 255], 0.4)
    );

    let bands: Vec<Color> = (0..WavesLayer::BANDS)
        .map(|band| WavesLayer::band_color(band, &tinted))
        .collect();
    assert_eq!(
        bands,
        vec![
            Color::hsla(140.0, 60.0, 50.0, 0.4),
            Color::hsla(140.0, 60.0, 45.0, 0.3),
            Color::hsla(140.0, 60.0, 40.0, 0.2),
        ]
    );
}

#[test]
fn lightning_strikes_about_once_per_two_hundred_resting_frames() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut thunder = ThunderLayer::new();
    let ctx = SceneContext {
        viewport: VIEW,
        ambient: None,
    };
    let mut surface = Recorder::default();
    let mut resting = 0u32;
    let mut strikes = 0u32;
    for _ in 0..40_000 {
        let before = thunder.opacity;
        let was_flashing = thunder.is_flashing();
        thunder.draw(&mut surface, &ctx, &mut rng);
        if was_flashing {
            // no new strike while a flash is still fading
            assert!(thunder.opacity < before);
        } else {
            resting += 1;
            if thunder.is_flashing() {
                strikes += 1;
            }
        }
        surface.ops.clear();
    }
    let rate = strikes as f64 / resting as f64;
    assert!((0.0035..=0.0065).contains(&rate), "rate={rate} strikes={strikes}");
}

#[test]
fn adaptation_without_a_frame_keeps_the_last_color() {
    let mut scene = scene();
    let mut probe = FixedProbe {
        color: None,
        calls: 0,
    };
    let flags = ToggleFlags {
        color_adapt: true,
        ..ToggleFlags::default()
    };
    let mut surface = Recorder::default();
    let report = scene.frame(&mut surface, &mut probe, VIEW, &flags);
    assert!(!report.sampled);
    assert_eq!(report.ambient, Some(AmbientColor::default()));
    assert_eq!(scene.ambient(), AmbientColor::default());
}

#[test]
fn resized_viewport_applies_on_the_next_frame() {
    let mut scene = scene();
    let mut surface = Recorder::default();
    let flags = ToggleFlags::default();
    scene.frame(&mut surface, &mut NoCamera, VIEW, &flags);
    let small = Viewport::new(100.0, 50.0);
    scene.frame(&mut surface, &mut NoCamera, small, &flags);
    assert_eq!(surface.ops[3], Op::FillRect(0.0, 0.0, 100.0, 50.0));
    assert_eq!(scene.frames(), 2);
}

#[test]
fn waves_trace_each_band_across_the_width() {
    let mut waves = WavesLayer::new();
    let ctx = SceneContext {
        viewport: Viewport::new(50.0, 100.0),
        ambient: None,
    };
    let mut surface = Recorder::default();
    waves.draw(&mut surface, &ctx);
    assert_eq!(surface.draws(), 3);
    let line_tos = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::LineTo(..)))
        .count();
    // left edge + columns 1..50 + bottom-right corner, per band
    assert_eq!(line_tos, 3 * (1 + 49 + 1));
    assert_eq!(surface.ops[2], Op::MoveTo(0.0, 100.0));
    assert!((waves.phase - 0.02).abs() < 1e-6);
    waves.draw(&mut surface, &ctx);
    assert!((waves.phase - 0.04).abs() < 1e-6);
}
