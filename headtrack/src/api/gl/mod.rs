//! OpenGL backend over `gleam`. Window and context creation stay with the
//! caller, which also supplies the buffer swap.

use gleam::gl;
use gleam::gl::Gl;
use headtrack_api::{DrawBuffer, ProjectionMatrix, Rasterizer, RenderTarget, ViewMatrix, Viewport};
use std::rc::Rc;

pub type SwapBuffers = Box<dyn FnMut()>;

pub struct GlRenderTarget {
    gl: Rc<dyn Gl>,
    swap: SwapBuffers,
}

impl GlRenderTarget {
    // `swap` is invoked once per presented frame, on the thread that owns
    // the current context.
    pub fn new(gl: Rc<dyn Gl>, swap: SwapBuffers) -> GlRenderTarget {
        GlRenderTarget {
            gl: gl,
            swap: swap,
        }
    }

    fn check_error(&self, what: &str) {
        let err = self.gl.get_error();
        if err != gl::NO_ERROR {
            error!("GL error 0x{:x} after {}", err, what);
        }
    }
}

impl RenderTarget for GlRenderTarget {
    fn select_buffer(&mut self, buffer: DrawBuffer) {
        let target = match buffer {
            DrawBuffer::Back => gl::BACK,
            DrawBuffer::BackLeft => gl::BACK_LEFT,
            DrawBuffer::BackRight => gl::BACK_RIGHT,
        };
        self.gl.draw_buffers(&[target]);
        self.check_error("selecting draw buffer");
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.gl.viewport(viewport.x, viewport.y, viewport.width, viewport.height);
    }

    fn clear(&mut self) {
        self.gl.clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }

    fn present(&mut self) {
        (self.swap)();
        self.check_error("swapping buffers");
    }
}

/// Uploads the matrices to two `mat4` uniforms of a linked program before
/// running the draw callback.
pub struct GlRasterizer {
    gl: Rc<dyn Gl>,
    program: gl::GLuint,
    view_location: gl::GLint,
    projection_location: gl::GLint,
}

impl GlRasterizer {
    pub fn new(gl: Rc<dyn Gl>, program: gl::GLuint,
               view_uniform: &str, projection_uniform: &str) -> GlRasterizer {
        let view_location = gl.get_uniform_location(program, view_uniform);
        let projection_location = gl.get_uniform_location(program, projection_uniform);
        if view_location < 0 {
            warn!("Uniform '{}' not found in program {}", view_uniform, program);
        }
        if projection_location < 0 {
            warn!("Uniform '{}' not found in program {}", projection_uniform, program);
        }
        GlRasterizer {
            gl: gl,
            program: program,
            view_location: view_location,
            projection_location: projection_location,
        }
    }
}

impl Rasterizer for GlRasterizer {
    fn render(&mut self, view: &ViewMatrix, projection: &ProjectionMatrix, draw: &mut dyn FnMut()) {
        self.gl.use_program(self.program);
        // Column-major already; no transpose.
        self.gl.uniform_matrix_4fv(self.view_location, false, &view.cast::<f32>().to_array());
        self.gl.uniform_matrix_4fv(self.projection_location, false, &projection.cast::<f32>().to_array());
        draw();
    }
}
