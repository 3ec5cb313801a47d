use std::io;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use clap::Parser;
use model_viewer::assets::{load_models, load_textures, TextureImage};
use model_viewer::camera::Camera;
use model_viewer::cli::Cli;
use model_viewer::clock::FrameClock;
use model_viewer::controller::{Button, Controller};
use model_viewer::input::WinitController;
use model_viewer::keymap::{handle_key, DiscreteKey, Outcome, Selection, ShadingParams};
use model_viewer::mesh::CpuMesh;
use model_viewer::sampler::sample;
use model_viewer::status::StatusDisplay;
use model_viewer::viewer::Viewer;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 800;

struct App {
    window: Option<Arc<Window>>,
    viewer: Option<Viewer>,
    meshes: Vec<CpuMesh>,
    images: Vec<TextureImage>,
    camera: Camera,
    clock: FrameClock,
    controller: WinitController,
    selection: Selection,
    params: ShadingParams,
    status: Option<StatusDisplay<io::Stdout>>,
}

impl App {
    fn new(meshes: Vec<CpuMesh>, images: Vec<TextureImage>, show_status: bool) -> Self {
        Self {
            window: None,
            viewer: None,
            meshes,
            images,
            camera: Camera::new(),
            clock: FrameClock::new(),
            controller: WinitController::new(),
            selection: Selection::new(),
            params: ShadingParams::new(),
            status: show_status.then(StatusDisplay::stdout),
        }
    }

    fn handle_discrete_key(&mut self, event_loop: &ActiveEventLoop, key: DiscreteKey) {
        let Some(viewer) = &self.viewer else {
            return;
        };
        let shifted = self.controller.is_down(Button::Shift);
        let outcome = handle_key(
            key,
            shifted,
            &mut self.selection,
            &mut self.params,
            viewer.model_count(),
            viewer.texture_count(),
        );
        if outcome == Outcome::Exit {
            event_loop.exit();
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();

        let (dx, dy) = self.controller.take_mouse_delta();
        self.camera.process_mouse(dx, dy);

        // Fresh per-frame deltas: applied once by the renderer, then dropped
        let deltas = sample(&self.controller, &mut self.camera, delta);

        if let Some(viewer) = &mut self.viewer {
            match viewer.render(&self.camera, &self.selection, &self.params, deltas) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    if let Some(window) = &self.window {
                        viewer.resize(window.inner_size());
                    }
                }
                Err(e) => log::error!("render error: {e}"),
            }
        }

        if let Some(status) = &mut self.status {
            if let Err(e) = status.print(&self.selection, &self.params) {
                log::warn!("status output failed: {e}");
                self.status = None;
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Model Viewer")
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            // Capture the cursor; look input comes from raw device motion,
            // so the grab only has to keep the pointer out of the way
            if let Err(e) = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
            {
                log::warn!("cursor grab unavailable: {e}");
            }
            window.set_cursor_visible(false);

            let viewer =
                match pollster::block_on(Viewer::new(window.clone(), &self.meshes, &self.images)) {
                    Ok(v) => v,
                    Err(e) => {
                        log::error!("failed to initialize renderer: {e:#}");
                        event_loop.exit();
                        return;
                    }
                };

            self.window = Some(window);
            self.viewer = Some(viewer);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } => {
                let (state, repeat) = (key_event.state, key_event.repeat);
                let keycode = key_event.physical_key;
                self.controller.process_event(&event);
                if let PhysicalKey::Code(keycode) = keycode {
                    if let Some(key) = DiscreteKey::from_key_press(keycode, state, repeat) {
                        self.handle_discrete_key(event_loop, key);
                    }
                }
            }
            WindowEvent::Focused(_) => {
                self.controller.process_event(&event);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.controller.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let meshes = load_models(&cli.model_dir)?;
    let images = load_textures(&cli.texture_dir)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(meshes, images, !cli.no_status);
    event_loop.run_app(&mut app)?;

    Ok(())
}
