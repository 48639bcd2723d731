pub mod layout;
mod renderthing;

use std::{cell::RefCell, rc::Rc};

use layout::{Geometry, Layout};
use libgame::{
    board::TileState,
    color::Color,
    controller::{RunState, SimulationController},
};
use renderthing::{frame::RenderFrame, window::RendererWindowConfig, Renderer};
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{Key, NamedKey},
};

use crate::config::Config;

const BACKGROUND: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const TILE_OUTLINE: [u8; 4] = [0xcc, 0xcc, 0xcc, 0xff];
const BUTTON_TEXT: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const START_BUTTON: [u8; 4] = [0x4c, 0xaf, 0x50, 0xff];
const PAUSE_BUTTON: [u8; 4] = [0xff, 0x57, 0x33, 0xff];
// Only seen if a frame is drawn before the first tick.
const NO_COLOR: [u8; 4] = [0x40, 0x40, 0x40, 0xff];

const HALF_TILE_MARGIN: u32 = 1;

pub fn run(controller: SimulationController, config: &Config) -> anyhow::Result<()> {
    let geometry = config.geometry()?;
    let (width, height) = geometry.logical_size();

    let renderer_state = RendererState {
        controller,
        geometry,
        title: config.title.clone(),
        color: None,
        layout: None,
        cursor: None,
    };

    let renderer_state_rc = Rc::new(RefCell::new(renderer_state));
    let tick_state_rc = renderer_state_rc.clone();
    let draw_state_rc = renderer_state_rc.clone();
    let event_state_rc = renderer_state_rc;

    let renderer = Renderer::new(RendererWindowConfig {
        title: config.title.clone(),
        width,
        height,
        tick_interval: config.interval(),
        tick_callback: Box::new(move || {
            let mut state = tick_state_rc.borrow_mut();
            tick(&mut state)
        }),
        draw_callback: Box::new(move |frame: RenderFrame| {
            let mut state = draw_state_rc.borrow_mut();
            draw(&mut state, frame);
        }),
        event_callback: Some(Box::new(move |event: &WindowEvent| {
            let mut state = event_state_rc.borrow_mut();
            on_event(&mut state, event)
        })),
    })?;

    renderer.run()
}

/// Advances the simulation and returns the new window title.
fn tick(state: &mut RendererState) -> String {
    let frame = state.controller.tick();
    state.color = Some(frame.color);

    format!("{} - generation {}", state.title, frame.generation)
}

fn draw(state: &mut RendererState, mut frame: RenderFrame) {
    let layout = Layout::new(frame.width, frame.height, state.geometry);
    state.layout = Some(layout);

    let color = state.color.map_or(NO_COLOR, Color::rgba);
    let game = state.controller.game();

    frame.fill(BACKGROUND);

    for (tile_pos, tile) in game.board().enumerate_tiles() {
        let rect = layout.tile_rect(tile_pos);

        let fill = match tile {
            TileState::Alive => color,
            TileState::Dead => BACKGROUND,
        };

        frame.draw_square(rect.x, rect.y, rect.width, rect.height, TILE_OUTLINE);
        frame.draw_square(
            rect.x + HALF_TILE_MARGIN,
            rect.y + HALF_TILE_MARGIN,
            rect.width.saturating_sub(HALF_TILE_MARGIN * 2),
            rect.height.saturating_sub(HALF_TILE_MARGIN * 2),
            fill,
        );
    }

    frame.draw_text(
        layout.label_x,
        layout.label_y,
        layout.glyph_scale,
        &format!("GEN {}", game.generation()),
        color,
    );

    let (label, background) = button_face(state.controller.state());
    let button = layout.button;
    frame.draw_square(button.x, button.y, button.width, button.height, background);

    let scale = layout.glyph_scale;
    let text_width = renderthing::font::text_width(label, scale);
    let text_height = renderthing::font::GLYPH_HEIGHT * scale;
    frame.draw_text(
        button.x + button.width.saturating_sub(text_width) / 2,
        button.y + button.height.saturating_sub(text_height) / 2,
        scale,
        label,
        BUTTON_TEXT,
    );
}

/// The button offers the opposite of the current state.
fn button_face(run_state: RunState) -> (&'static str, [u8; 4]) {
    match run_state {
        RunState::Paused => ("START", START_BUTTON),
        RunState::Running => ("PAUSE", PAUSE_BUTTON),
    }
}

fn on_event(state: &mut RendererState, event: &WindowEvent) -> bool {
    let toggle = match event {
        WindowEvent::CursorMoved { position, .. } => {
            let mouse_pos = position.cast::<u32>();
            state.cursor = Some((mouse_pos.x, mouse_pos.y));
            false
        }
        WindowEvent::CursorLeft { .. } => {
            state.cursor = None;
            false
        }
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            button: MouseButton::Left,
            ..
        } => match (state.cursor, state.layout) {
            (Some((x, y)), Some(layout)) => layout.button.contains(x, y),
            _ => false,
        },
        WindowEvent::KeyboardInput { event, .. } => {
            event.state == ElementState::Pressed
                && !event.repeat
                && event.logical_key == Key::Named(NamedKey::Space)
        }
        _ => false,
    };

    if toggle {
        state.controller.toggle();
    }

    toggle
}

struct RendererState {
    controller: SimulationController,
    geometry: Geometry,
    title: String,
    color: Option<Color>,
    // Layout of the last drawn frame, for hit-testing clicks.
    layout: Option<Layout>,
    cursor: Option<(u32, u32)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_offers_the_other_state() {
        assert_eq!(button_face(RunState::Paused), ("START", START_BUTTON));
        assert_eq!(button_face(RunState::Running), ("PAUSE", PAUSE_BUTTON));
    }

    #[test_log::test]
    fn paused_tick_keeps_generation_in_title() {
        let controller = SimulationController::from_seed(4, 4, 9).unwrap();
        let mut state = RendererState {
            controller,
            geometry: Geometry::new(4, 4, 10).unwrap(),
            title: "life".to_owned(),
            color: None,
            layout: None,
            cursor: None,
        };

        assert_eq!(tick(&mut state), "life - generation 0");
        assert!(state.color.is_some());

        state.controller.toggle();
        assert_eq!(tick(&mut state), "life - generation 1");
        assert_eq!(tick(&mut state), "life - generation 2");
    }

    #[test]
    fn draw_paints_live_tiles_in_the_tick_color() {
        let controller = SimulationController::from_seed(4, 4, 9).unwrap();
        let geometry = Geometry::new(4, 4, 10).unwrap();
        let mut state = RendererState {
            controller,
            geometry,
            title: String::new(),
            color: None,
            layout: None,
            cursor: None,
        };
        tick(&mut state);

        let (width, height) = geometry.logical_size();
        let mut buffer = vec![0; (width * height) as usize * renderthing::frame::PIXEL_BITS];
        draw(
            &mut state,
            RenderFrame {
                width,
                height,
                buffer: &mut buffer,
            },
        );

        let layout = state.layout.unwrap();
        let color = state.color.unwrap().rgba();
        let pixel_at = |x: u32, y: u32| {
            let index = (x + y * width) as usize * renderthing::frame::PIXEL_BITS;
            &buffer[index..index + 4]
        };

        for (pos, tile) in state.controller.game().board().enumerate_tiles() {
            let rect = layout.tile_rect(pos);
            let center = pixel_at(rect.x + rect.width / 2, rect.y + rect.height / 2);
            let expected = if tile.is_alive() { color } else { BACKGROUND };

            assert_eq!(center, expected, "tile {pos:?}");
            assert_eq!(pixel_at(rect.x, rect.y), TILE_OUTLINE, "outline {pos:?}");
        }
    }
}
