use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::{CStr, CString};
use std::num::NonZeroU32;
use std::time::Instant;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use gl_wrapper::geometry::{GBError, Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{PBError, Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::{QUAD_INDICES, QUAD_VERTICES};

use hello_triangle::input::KeyCode;
use hello_triangle::shader_source;
use hello_triangle::{FrameLoop, FrameTarget, FrameUniforms, InputEvent, LoopPhase};

use crate::args::Args;

const WINDOW_TITLE: &str = "Hello Triangle Indexed";

pub struct App {
    event_loop: EventLoop<()>,
    target: GlTarget,
    frame_loop: FrameLoop,
}

impl App {
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(args.width, args.height)))
            .with_title(WINDOW_TITLE);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        // glutin never calls the picker with an empty iterator
        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| {
                configs.next().expect("no GL config offered")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr) }
            .map_err(AppError::Context)?
            .make_current(&gl_window.surface)
            .map_err(AppError::MakeCurrent)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(name) => gl_display.get_proc_address(name.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        log_gl_info();

        let interval = match NonZeroU32::new(1) {
            Some(one) if !args.no_vsync => SwapInterval::Wait(one),
            _ => SwapInterval::DontWait,
        };
        if let Err(e) = gl_window.surface.set_swap_interval(&gl_context, interval) {
            log::warn!("could not set swap interval {interval:?}: {e}");
        }

        let quad = Quad::new(args)?;

        let size = gl_window.window.inner_size();
        let renderer = GlRenderer::new();
        renderer.resize(size.width, size.height);
        log::info!("window {}x{}", size.width, size.height);

        let target = GlTarget {
            quad,
            renderer,
            gl_context,
            gl_window,
        };

        Ok(Self {
            event_loop,
            target,
            frame_loop: FrameLoop::new(),
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            target,
            mut frame_loop,
        } = self;

        // winit exits the process without dropping the handler, GL objects are
        // released by taking the target out when the loop terminates.
        let mut target = Some(target);
        let start = Instant::now();

        event_loop.run(move |event, _window_target, control_flow| {
            control_flow.set_poll();
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let Some(target) = &target {
                            target.resize(size);
                        }
                    }
                    WindowEvent::CloseRequested => {
                        frame_loop.events().push(InputEvent::CloseRequested);
                    }
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode: Some(key),
                                state,
                                ..
                            },
                        ..
                    } => {
                        if let Some(code) = key_code(key) {
                            frame_loop.events().push(InputEvent::Key {
                                code,
                                pressed: state == ElementState::Pressed,
                            });
                        }
                    }
                    _ => (),
                },
                Event::MainEventsCleared => {
                    let res = match target.as_mut() {
                        Some(target) => frame_loop.iterate(target, start.elapsed()),
                        None => return,
                    };

                    match res {
                        Ok(LoopPhase::Terminated) => {
                            log::info!("shutting down");
                            target = None;
                            control_flow.set_exit();
                        }
                        Ok(_) => (),
                        Err(e) => log::error!("could not present frame: {e}"),
                    }
                }
                Event::LoopDestroyed => {
                    target = None;
                }
                _ => (),
            }
        })
    }
}

/// Shader program and indexed quad. Fields drop in creation-reverse order.
struct Quad {
    program: Program,
    geometry: Geometry,
    color_location: i32,
    position_location: i32,
}

impl Quad {
    fn new(args: &Args) -> Result<Self, AppError> {
        let geometry = GeometryBuilder::new(&QUAD_VERTICES)
            .with_attribute(VertexAttribute::Vec3)
            .with_indices(&QUAD_INDICES)
            .build()?;

        let sources = shader_source::load_or_embedded(&args.vertex_shader, &args.fragment_shader);
        log::info!(
            "vertex shader: {:?}, fragment shader: {:?}",
            sources.vertex_origin,
            sources.fragment_origin
        );

        let build = ProgramBuilder::new(&sources.vertex, &sources.fragment)?.build();
        for e in &build.errors {
            log::error!("{e}");
        }
        if !build.is_usable() {
            log::error!("continuing with an incomplete shader program");
        }

        let program = build.program;
        let color_location = uniform(&program, "ourColor");
        let position_location = uniform(&program, "ourPosition");

        Ok(Self {
            program,
            geometry,
            color_location,
            position_location,
        })
    }
}

fn uniform(program: &Program, name: &str) -> i32 {
    let location = program.uniform_location(name);
    if location < 0 {
        log::warn!("uniform {name} not found in shader program");
    }
    location
}

struct GlTarget {
    quad: Quad,
    renderer: GlRenderer,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
}

impl GlTarget {
    fn resize(&self, size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            self.gl_window
                .surface
                .resize(&self.gl_context, width, height);
            self.renderer.resize(size.width, size.height);
        }
    }
}

impl FrameTarget for GlTarget {
    type Error = glutin::error::Error;

    fn set_title(&mut self, title: &str) {
        self.gl_window.window.set_title(title);
    }

    fn set_wireframe(&mut self, wireframe: bool) {
        self.renderer.set_wireframe(wireframe);
    }

    fn clear(&mut self) {
        self.renderer.clear_color(0.0, 0.0, 0.0);
    }

    fn draw(&mut self, uniforms: &FrameUniforms) {
        let quad = &self.quad;

        self.renderer.use_program(&quad.program);
        quad.program
            .set_vec4(quad.color_location, uniforms.color.into());
        quad.program
            .set_vec4(quad.position_location, uniforms.position.into());
        self.renderer.draw(&quad.geometry, &quad.program);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.gl_window.surface.swap_buffers(&self.gl_context)
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(AppError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(AppError::ZeroSize)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs) }
            .map_err(AppError::Surface)?;

        Ok(Self { window, surface })
    }
}

fn log_gl_info() {
    for (name, id) in [
        ("vendor", gl::VENDOR),
        ("renderer", gl::RENDERER),
        ("version", gl::VERSION),
    ] {
        let ptr = unsafe { gl::GetString(id) };
        if !ptr.is_null() {
            let value = unsafe { CStr::from_ptr(ptr.cast()) };
            log::info!("GL {name}: {}", value.to_string_lossy());
        }
    }
}

fn key_code(key: VirtualKeyCode) -> Option<KeyCode> {
    let code = match key {
        VirtualKeyCode::Escape => KeyCode::ESCAPE,
        VirtualKeyCode::W => KeyCode::W,
        VirtualKeyCode::Up => KeyCode::UP,
        VirtualKeyCode::Down => KeyCode::DOWN,
        VirtualKeyCode::Left => KeyCode::LEFT,
        VirtualKeyCode::Right => KeyCode::RIGHT,
        VirtualKeyCode::Key0 => KeyCode::NUM_0,
        VirtualKeyCode::Key1 => KeyCode::NUM_1,
        VirtualKeyCode::Key2 => KeyCode::NUM_2,
        VirtualKeyCode::Key3 => KeyCode::NUM_3,
        VirtualKeyCode::Key4 => KeyCode::NUM_4,
        VirtualKeyCode::Key5 => KeyCode::NUM_5,
        VirtualKeyCode::Key6 => KeyCode::NUM_6,
        VirtualKeyCode::Key7 => KeyCode::NUM_7,
        VirtualKeyCode::Key8 => KeyCode::NUM_8,
        VirtualKeyCode::Key9 => KeyCode::NUM_9,
        _ => return None,
    };

    Some(code)
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create window: {0}")]
    Display(String),
    #[error("no window was created")]
    NoWindow,
    #[error("window has zero size")]
    ZeroSize,
    #[error("could not create OpenGL context: {0}")]
    Context(glutin::error::Error),
    #[error("could not make OpenGL context current: {0}")]
    MakeCurrent(glutin::error::Error),
    #[error("could not create window surface: {0}")]
    Surface(glutin::error::Error),
    #[error("invalid quad geometry: {0}")]
    Geometry(#[from] GBError),
    #[error("invalid shader source: {0}")]
    Program(#[from] PBError),
}
