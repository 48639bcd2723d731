use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Context;
use pixels::{wgpu::TextureFormat, Pixels, PixelsBuilder, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowAttributes},
};

use super::{clock::TickClock, frame::RenderFrame};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    clock: TickClock,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let clock = TickClock::new(config.tick_interval);

        Self {
            config,
            resumed_window: None,
            clock,
        }
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub tick_interval: Duration,
    /// Runs once per tick interval and returns the window title.
    pub tick_callback: Box<dyn FnMut() -> String>,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
    /// Returns true if the event changed something that needs a redraw.
    pub event_callback: Option<Box<dyn FnMut(&WindowEvent) -> bool>>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ResumedWindow {
    fn create(event_loop: &ActiveEventLoop, config: &RendererWindowConfig) -> anyhow::Result<Self> {
        let window = Arc::new({
            let window_size = LogicalSize::new(config.width as f64, config.height as f64);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(config.title.clone())
                        .with_inner_size(window_size)
                        .with_min_inner_size(window_size),
                )
                .context("Creating window")?
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        Ok(Self { window, pixels })
    }
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match ResumedWindow::create(event_loop, &self.config) {
            Ok(resumed_window) => {
                // The first frame is drawn from a ticked state.
                let title = poll_tick(
                    &mut self.clock,
                    self.config.tick_callback.as_mut(),
                    Instant::now(),
                );
                if let Some(title) = title {
                    resumed_window.window.set_title(&title);
                }

                resumed_window.window.request_redraw();
                self.resumed_window = Some(resumed_window);
            }
            Err(e) => {
                log::error!("{e:?}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ResumedWindow { window, .. }) = &self.resumed_window else {
            return;
        };

        let title = poll_tick(
            &mut self.clock,
            self.config.tick_callback.as_mut(),
            Instant::now(),
        );
        if let Some(title) = title {
            window.set_title(&title);
            window.request_redraw();
        }

        if let Some(deadline) = self.clock.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match &event {
            WindowEvent::RedrawRequested => {
                let PhysicalSize { width, height } = window.inner_size();
                let buffer = pixels.frame_mut();

                // Right after a resize the buffer can lag behind the window size for a frame.
                if buffer.len() == width as usize * height as usize * super::frame::PIXEL_BITS {
                    (self.config.draw_callback)(RenderFrame {
                        width,
                        height,
                        buffer,
                    });
                }

                if let Err(e) = pixels.render() {
                    log::error!("Rendering with pixels: {e}");
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                // Minimized windows report a zero size, which pixels refuses.
                if *width > 0 && *height > 0 {
                    let resized = pixels
                        .resize_surface(*width, *height)
                        .and_then(|()| pixels.resize_buffer(*width, *height));

                    if let Err(e) = resized {
                        log::error!("Resizing pixels buffer: {e}");
                        event_loop.exit();
                    }
                }

                window.request_redraw();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => {}
        }

        if let Some(event_callback) = &mut self.config.event_callback {
            if event_callback(&event) {
                window.request_redraw();
            }
        }
    }
}

/// Runs `tick_callback` if `clock` has a tick due at `now`, returning the title it produced.
fn poll_tick(
    clock: &mut TickClock,
    tick_callback: &mut dyn FnMut() -> String,
    now: Instant,
) -> Option<String> {
    clock.poll(now).then(tick_callback)
}
