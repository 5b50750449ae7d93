use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glide_core::{
    compute_step, Axis, FrameQueue, ScrollRequest, ScrollSurface, SmoothScroll, StepPolicy,
    WheelDivisor,
};

struct Surface {
    y: i64,
}

impl ScrollSurface for Surface {
    fn scroll_position(&self, _axis: Axis) -> i64 {
        self.y
    }

    fn set_scroll_position(&mut self, axis: Axis, value: i64) -> bool {
        if axis == Axis::Horizontal {
            return false;
        }
        let changed = self.y != value;
        self.y = value;
        changed
    }

    fn commit_visual_update(&mut self) {}

    fn viewport_height(&self) -> i64 {
        800
    }

    fn line_height(&self) -> f64 {
        16.0
    }

    fn scroll_sensitivity(&self) -> f64 {
        40.0
    }
}

fn bench_compute_step(c: &mut Criterion) {
    let divisor = WheelDivisor::default();
    c.bench_function("compute_step_drain_adaptive", |b| {
        b.iter(|| {
            let mut pending = black_box(1_000_000i64);
            while pending != 0 {
                pending -= compute_step(pending, StepPolicy::Adaptive, divisor);
            }
        })
    });
}

fn bench_session_glide(c: &mut Criterion) {
    c.bench_function("session_glide_many_targets", |b| {
        b.iter(|| {
            let mut session = SmoothScroll::default();
            let mut queue = FrameQueue::new();
            let mut surface = Surface { y: 0 };
            for target in 0..64u32 {
                session.attach(target);
                session.push(target, ScrollRequest::merge(0, 4_800), &mut queue);
            }
            while !queue.is_empty() {
                for (handle, target) in queue.take_due() {
                    session.on_frame(target, handle, &mut surface, &mut queue);
                }
            }
            black_box(surface.y)
        })
    });
}

criterion_group!(benches, bench_compute_step, bench_session_glide);
criterion_main!(benches);
