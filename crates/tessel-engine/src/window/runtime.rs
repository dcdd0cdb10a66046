use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::gl::{Gl, clear_screen};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::FrameClock;

use super::context::CurrentContext;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Wait for vertical blank on swap.
    pub vsync: bool,
    /// RGBA the color buffer is cleared to before each frame.
    pub clear_color: [f32; 4],
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tessel".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            vsync: true,
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, calls `build` once its GL context is current, then drives
    /// the resulting app until it exits or the window closes.
    ///
    /// Errors from `build` or from context creation end the loop and are returned.
    pub fn run<A, F>(config: RuntimeConfig, build: F) -> Result<()>
    where
        A: App + 'static,
        F: FnOnce(&Gl) -> Result<A>,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState {
            config,
            build: Some(build),
            window: None,
            failure: None,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Everything tied to the one open window.
///
/// Field order is drop order: the app releases its GL objects while the context is
/// still alive, and the window outlives its surface.
struct WindowEntry<A> {
    app: A,
    context: CurrentContext,
    window: Window,

    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    clear_color: [f32; 4],
}

struct RuntimeState<A, F> {
    config: RuntimeConfig,
    build: Option<F>,
    window: Option<WindowEntry<A>>,
    failure: Option<anyhow::Error>,
}

impl<A, F> RuntimeState<A, F>
where
    A: App + 'static,
    F: FnOnce(&Gl) -> Result<A>,
{
    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop, build: F) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let context = CurrentContext::new(&window, self.config.vsync)?;
        let mut app = build(&context.gl).context("application setup failed")?;

        let size = window.inner_size();
        app.on_resize(size.width, size.height);

        self.window = Some(WindowEntry {
            app,
            context,
            window,
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            clear_color: self.config.clear_color,
        });
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.shutdown(event_loop);
    }

    /// Drops the app and context while the event loop is still alive.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.window = None;
        event_loop.exit();
    }
}

impl<A> WindowEntry<A>
where
    A: App,
{
    fn id(&self) -> WindowId {
        self.window.id()
    }

    fn redraw(&mut self) -> Result<AppControl> {
        let time = self.clock.tick();
        let size = self.window.inner_size();

        clear_screen(&*self.context.gl, self.clear_color);

        let control = {
            let mut ctx = FrameCtx {
                gl: &self.context.gl,
                input: &self.input_state,
                input_frame: &self.input_frame,
                time,
                size: (size.width, size.height),
            };
            self.app.on_frame(&mut ctx)
        };
        self.input_frame.clear();

        self.window.pre_present_notify();
        self.context.swap_buffers()?;
        Ok(control)
    }
}

impl<A, F> ApplicationHandler for RuntimeState<A, F>
where
    A: App + 'static,
    F: FnOnce(&Gl) -> Result<A>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(build) = self.build.take() else {
            return;
        };

        match self.create_window_entry(event_loop, build) {
            Ok(()) => {
                if let Some(entry) = &self.window {
                    entry.window.request_redraw();
                }
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw.
        if let Some(entry) = &self.window {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };
        if entry.id() != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            entry.input_state.apply_event(&mut entry.input_frame, ev);
        }

        if entry.app.on_window_event(&event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(size) => {
                if entry.context.resize(*size) {
                    entry.app.on_resize(size.width, size.height);
                }
                entry.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = entry.window.inner_size();
                if entry.context.resize(size) {
                    entry.app.on_resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => match entry.redraw() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.shutdown(event_loop),
                Err(err) => self.fail(event_loop, err),
            },

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.window = None;
    }
}
