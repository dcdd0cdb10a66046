use std::ffi::CStr;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{Context, Result};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::gl::{Gl, log_driver_info};

/// Current GL context bound to a window surface.
///
/// Field order is drop order: the loader goes first, the context last.
pub(crate) struct CurrentContext {
    pub(crate) gl: Gl,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
}

impl CurrentContext {
    /// Creates an OpenGL 3.3 core context for `window`, makes it current and loads
    /// function pointers.
    pub(crate) fn new(window: &Window, vsync: bool) -> Result<Self> {
        let raw_window = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();
        let raw_display = window
            .display_handle()
            .context("window has no display handle")?
            .as_raw();

        let display = unsafe { Display::new(raw_display, display_preference(raw_window)) }
            .context("failed to open GL display")?;

        let template = ConfigTemplateBuilder::new()
            .with_depth_size(24)
            .with_alpha_size(8)
            .compatible_with_native_window(raw_window)
            .build();
        let config = unsafe { display.find_configs(template) }
            .context("failed to enumerate GL configs")?
            .next()
            .context("no GL config with a 24-bit depth buffer")?;

        let (width, height) = surface_size(window.inner_size())
            .unwrap_or((NonZeroU32::MIN, NonZeroU32::MIN));
        let surface_attrs =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window, width, height);
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window));
        let context = unsafe { display.create_context(&config, &context_attrs) }
            .context("failed to create OpenGL 3.3 core context")?
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let interval = if vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval (vsync {vsync}): {e}");
        }

        let native = unsafe {
            glow::Context::from_loader_function_cstr(|s: &CStr| display.get_proc_address(s))
        };
        let gl: Gl = Rc::new(native);

        log_driver_info(&*gl);
        gl.enable(glow::DEPTH_TEST);
        gl.viewport(0, 0, width.get() as i32, height.get() as i32);

        Ok(Self {
            gl,
            surface,
            context,
        })
    }

    /// Resizes the surface and viewport. Returns `false` for an empty size.
    pub(crate) fn resize(&self, size: PhysicalSize<u32>) -> bool {
        let Some((width, height)) = surface_size(size) else {
            return false;
        };
        self.surface.resize(&self.context, width, height);
        self.gl.viewport(0, 0, width.get() as i32, height.get() as i32);
        true
    }

    pub(crate) fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

#[cfg(target_os = "windows")]
fn display_preference(raw_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Wgl(Some(raw_window))
}

#[cfg(target_os = "macos")]
fn display_preference(_raw_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_preference(_raw_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

/// Surfaces cannot be zero-sized; minimized windows report 0×0.
pub(crate) fn surface_size(size: PhysicalSize<u32>) -> Option<(NonZeroU32, NonZeroU32)> {
    Some((NonZeroU32::new(size.width)?, NonZeroU32::new(size.height)?))
}
