use anyhow::Context as _;
use glutin::dpi::{LogicalPosition, LogicalSize};
use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlRequest};

use gltest::gl_api::misc::{self, Viewport};
use gltest::gl_api::shader::build_pipeline;
use gltest::gl_api::shader::shader::ShaderType;
use gltest::gl_api::vertex_array::{upload_attributes, AttributeSpec};
use gltest::input::{KeyDispatch, KeyState};

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;

const VSHADER_SRC: &str = r#"
    #version 130

    in vec2 vPosition;
    in vec3 vColor;

    out vec3 ffColor;

    void main() {
        gl_Position = vec4(vPosition, 0, 1);
        ffColor = vColor;
    }
"#;

const FSHADER_SRC: &str = r#"
    #version 130

    in vec3 ffColor;
    out vec4 fColor;

    void main() {
        fColor = vec4(ffColor, 1);
    }
"#;

const TRI_POSITION_DATA: &[f32] = &[
    0.0, 0.0, 1.0, 0.0, 0.5, 1.0, //
    0.0, 0.0, -1.0, 0.0, -0.5, -1.0,
];

const TRI_COLOR_DATA: &[f32] = &[
    1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, //
    0.5, 0.5, 0.0, 0.0, 0.5, 0.5, 0.5, 0.0, 0.5,
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("GL Test")
        .with_position(LogicalPosition::new(0, 0))
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 0)))
        .with_depth_buffer(24)
        .with_vsync(true)
        .build_windowed(window, &event_loop)
        .context("failed to create the GL window")?;

    // make_current hands the context back alongside the error on failure.
    let context = unsafe { context.make_current() }
        .map_err(|(_, err)| err)
        .context("failed to make the GL context current")?;
    gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);

    misc::clear_color(0.0, 0.0, 0.0, 0.0)?;
    let mut viewport = Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    viewport.apply()?;

    let program = build_pipeline(&[
        (ShaderType::Vertex, VSHADER_SRC),
        (ShaderType::Fragment, FSHADER_SRC),
    ])?;

    let vao = upload_attributes(
        &program,
        &[
            AttributeSpec::new("vPosition", 2, TRI_POSITION_DATA),
            AttributeSpec::new("vColor", 3, TRI_COLOR_DATA),
        ],
    )?;

    log::info!("startup complete, entering the event loop");

    let mut keys = KeyState::new();
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => {
                    if keys.handle(&input) == KeyDispatch::Quit {
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::Resized(size) => {
                    context.resize(size);
                    viewport.resize(size.width as i32, size.height as i32);
                    viewport.apply().expect("viewport update failed");
                    context.window().request_redraw();
                }
                _ => (),
            },
            Event::RedrawRequested(_) => {
                misc::clear().expect("clear failed");
                vao.bind().expect("vertex array rebind failed");
                misc::draw_triangles(vao.vertex_count()).expect("draw failed");
                context.swap_buffers().expect("swap failed");
            }
            _ => (),
        }
    });
}
