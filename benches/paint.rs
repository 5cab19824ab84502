use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use visualizer::{
    CanvasWindow, Colour, FrameSink, PixelRect, Point, Texture, VisualizerEvent, VisualizerState,
    scale_texture,
};

struct DiscardSink;

impl FrameSink for DiscardSink {
    fn publish(&self, frame: Texture) {
        black_box(frame);
    }

    fn request_paint(&self) {}

    fn release(&self) {}
}

fn bench_default_paint(c: &mut Criterion) {
    let mut window = CanvasWindow::new(Arc::new(DiscardSink));
    let mut state = VisualizerState::default();
    state.handle_event(VisualizerEvent::Resize(PixelRect::from_size(800, 800)), &mut window);
    state.handle_event(VisualizerEvent::left_press(Point::new(250, 610)), &mut window);

    c.bench_function("default_paint_800x800", |b| {
        b.iter(|| state.handle_event(black_box(VisualizerEvent::Paint), &mut window))
    });
}

fn bench_scale_texture(c: &mut Criterion) {
    let mut src = Texture::new(200, 150);
    src.fill(PixelRect::from_size(100, 150), Colour::RED);
    let mut target = Texture::new(800, 800);
    let dst = target.bounds();

    c.bench_function("scale_texture_200x150_to_800x800", |b| {
        b.iter(|| scale_texture(&mut target, dst, black_box(&src), src.bounds()))
    });
}

criterion_group!(benches, bench_default_paint, bench_scale_texture);
criterion_main!(benches);
