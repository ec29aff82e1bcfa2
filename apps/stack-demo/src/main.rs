//! Headless Stackpose demo.
//!
//! Builds a stack of random widgets, replays a scripted drag session against
//! it, and prints the per-card visuals a renderer would apply each step. Run
//! with `--features logging` and `RUST_LOG=debug` to watch the gesture and
//! settle internals.

use rand::rngs::ThreadRng;
use rand::Rng;
use stackpose::prelude::*;
use std::thread;
use std::time::Duration;
use web_time::Instant;

const APP_NAMES: &[&str] = &[
    "Calendar",
    "Watch",
    "Weather",
    "AppStore",
    "Wallet",
    "Notes",
    "Reminder",
    "Camera",
    "Calculator",
    "Maps",
    "Photos",
    "Messages",
    "Email",
    "Safari",
];

const WIDGET_COUNT: usize = 10;
const ICONS_PER_WIDGET: usize = 4;
const VIEWPORT_HEIGHT: f32 = 844.0;

/// Demo card payload: a row of labeled app icons.
struct IconRow {
    icons: Vec<(String, Color)>,
}

fn random_name(rng: &mut ThreadRng) -> &'static str {
    APP_NAMES[rng.random_range(0..APP_NAMES.len())]
}

fn random_color(rng: &mut ThreadRng) -> Color {
    Color::from_rgb8(rng.random(), rng.random(), rng.random())
}

fn build_items(rng: &mut ThreadRng) -> Vec<StackItem<IconRow>> {
    (0..WIDGET_COUNT)
        .map(|_| {
            let icons = (0..ICONS_PER_WIDGET)
                .map(|_| (random_name(rng).to_owned(), random_color(rng)))
                .collect();
            StackItem::new(random_name(rng), IconRow { icons })
        })
        .collect()
}

fn print_frame(stack: &WidgetStack<IconRow>) {
    println!(
        "location {:8.2}  container translate {:6.2}",
        stack.location(),
        stack.stack_translate()
    );
    for (item, card) in stack.items().iter().zip(stack.frame()) {
        println!(
            "  {:<12} height {:6.1}  scale {:.3}  opacity {:.3}  translate {:5.2}  margin {:.2}",
            item.label(),
            stack.metrics().card_height(card.offset),
            card.scale,
            card.opacity,
            card.translate,
            card.margin,
        );
    }
}

/// Replays a vertical drag as the host would deliver it: a press, a series
/// of move events one frame apart, then a release.
fn replay_drag(
    stack: &mut WidgetStack<IconRow>,
    clock_ms: &mut i64,
    from_y: f32,
    to_y: f32,
    steps: usize,
) {
    let x = 180.0;
    stack.handle_pointer(&PointerEvent::new(
        PointerEventKind::Down,
        Point::new(x, from_y),
        *clock_ms,
    ));
    let step = (to_y - from_y) / steps as f32;
    for i in 1..=steps {
        *clock_ms += 16;
        stack.handle_pointer(&PointerEvent::new(
            PointerEventKind::Move,
            Point::new(x, from_y + step * i as f32),
            *clock_ms,
        ));
    }
    *clock_ms += 16;
    stack.handle_pointer(&PointerEvent::new(
        PointerEventKind::Up,
        Point::new(x, to_y),
        *clock_ms,
    ));
}

/// Pumps the settle animation against a real frame clock until it rests.
fn run_settle(stack: &mut WidgetStack<IconRow>) {
    let mut last_frame = Instant::now();
    let mut frames = 0u32;
    loop {
        thread::sleep(Duration::from_millis(16));
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        frames += 1;
        if !stack.tick(dt) {
            break;
        }
    }
    println!("settled after {frames} frames at location {:.3}", stack.location());
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let mut rng = rand::rng();
    let registry = ThemeRegistry::new();
    let mut stack =
        WidgetStack::new(build_items(&mut rng), StackMetrics::default(), VIEWPORT_HEIGHT)
            .with_theme("dark");
    let theme = registry
        .get(stack.theme_name())
        .copied()
        .unwrap_or_else(StackTheme::dark);
    log::info!(
        "mounted {} widgets, theme {:?}, viewport {VIEWPORT_HEIGHT}",
        stack.len(),
        theme.blur_tint
    );
    for item in stack.items() {
        let icons: Vec<&str> = item.content().icons.iter().map(|(name, _)| name.as_str()).collect();
        log::debug!("widget '{}' icons {:?}", item.label(), icons);
    }

    println!("== at rest ==");
    print_frame(&stack);

    let mut clock_ms: i64 = 0;

    println!("\n== after scrolling two cards up ==");
    replay_drag(&mut stack, &mut clock_ms, 600.0, 280.0, 10);
    print_frame(&stack);

    println!("\n== pulled below the top (rubber band) ==");
    replay_drag(&mut stack, &mut clock_ms, 150.0, 550.0, 10);
    print_frame(&stack);

    println!("\n== springing back ==");
    run_settle(&mut stack);
    print_frame(&stack);
}
