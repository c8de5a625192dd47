use criterion::{criterion_group, criterion_main, Criterion};

use hello_triangle::input::KeyCode;
use hello_triangle::{AppState, InputEvent};

pub fn frame_update(c: &mut Criterion) {
    let mut state = AppState::new();
    state.handle_event(InputEvent::press(KeyCode::UP));
    state.handle_event(InputEvent::press(KeyCode::LEFT));

    c.bench_function("frame_update", |b| {
        b.iter(|| {
            state.advance();
            state.uniforms()
        })
    });
}

pub fn key_events(c: &mut Criterion) {
    let mut state = AppState::new();

    c.bench_function("key_events", |b| {
        b.iter(|| {
            state.handle_event(InputEvent::press(KeyCode::NUM_4));
            state.handle_event(InputEvent::release(KeyCode::NUM_4));
        })
    });
}

criterion_group!(benches, frame_update, key_events);
criterion_main!(benches);
