use cairo::{Context, ImageSurface};
use mathpad::draw::{Color, Point, color::WHITE};
use mathpad::input::{InputState, Mode, ScrollSettings, SurfaceEvent};

fn make_input_state() -> InputState {
    InputState::with_defaults(
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        },
        6.0,
        15.0,
        100.0,
        ScrollSettings::default(),
    )
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Blue channel of the pixel at (x, y); 255 on the white background, 0 on ink.
fn blue_at(surface: &mut ImageSurface, x: usize, y: usize) -> u8 {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    data[y * stride + x * 4]
}

fn render(input: &mut InputState) -> ImageSurface {
    let (surface, ctx) = surface_with_context(100, 100);
    input.render(&ctx, WHITE);
    drop(ctx);
    surface
}

#[test]
fn render_shows_committed_and_active_ink() {
    let mut input = make_input_state();
    input.on_touch_start(Point::new(10.0, 20.0));
    input.on_touch_move(Point::new(90.0, 20.0));
    input.on_touch_end();

    input.on_touch_start(Point::new(50.0, 60.0));
    input.on_touch_move(Point::new(50.0, 90.0));

    let mut surface = render(&mut input);
    assert!(!input.needs_redraw);
    assert_eq!(blue_at(&mut surface, 50, 20), 0, "committed stroke missing");
    assert_eq!(blue_at(&mut surface, 50, 75), 0, "active stroke missing");
    assert_eq!(blue_at(&mut surface, 20, 80), 255, "background should stay white");
}

#[test]
fn erased_stroke_disappears_from_render() {
    let mut input = make_input_state();
    for event in [
        SurfaceEvent::TouchStart { x: 10.0, y: 50.0 },
        SurfaceEvent::TouchMove { x: 40.0, y: 50.0 },
        SurfaceEvent::TouchEnd,
        SurfaceEvent::TouchStart { x: 70.0, y: 50.0 },
        SurfaceEvent::TouchMove { x: 90.0, y: 50.0 },
        SurfaceEvent::TouchEnd,
        SurfaceEvent::SetMode { mode: Mode::Erase },
        SurfaceEvent::TouchStart { x: 25.0, y: 60.0 },
        SurfaceEvent::TouchEnd,
    ] {
        input.handle_event(event);
    }

    assert_eq!(input.paths().len(), 1);
    let mut surface = render(&mut input);
    assert_eq!(blue_at(&mut surface, 25, 50), 255);
    assert_eq!(blue_at(&mut surface, 80, 50), 0);
}

#[test]
fn tap_renders_a_dot() {
    let mut input = make_input_state();
    input.handle_event(SurfaceEvent::TouchStart { x: 50.0, y: 50.0 });
    input.handle_event(SurfaceEvent::TouchEnd);

    let mut surface = render(&mut input);
    assert_eq!(blue_at(&mut surface, 50, 50), 0);
}
