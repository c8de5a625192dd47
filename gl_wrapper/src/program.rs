use gl::types::{GLint, GLuint};
use std::ffi::{c_char, CString, NulError};
use thiserror::Error;

const INFO_LOG_LEN: usize = 1024;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Result<Self, PBError> {
        Ok(Self {
            vert: CString::new(vert_src)?,
            frag: CString::new(frag_src)?,
        })
    }

    /// Compiles both stages and links them.
    ///
    /// Failures do not abort the build: the program object is always returned,
    /// together with every compiler and linker diagnostic that was produced.
    pub fn build(self) -> ProgramBuild {
        let mut errors = Vec::new();

        unsafe {
            let vert = compile_stage(gl::VERTEX_SHADER, &self.vert, &mut errors);
            let frag = compile_stage(gl::FRAGMENT_SHADER, &self.frag, &mut errors);

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            let mut success: GLint = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut GLint);
            if success != 1 {
                let mut buf = [0_u8; INFO_LOG_LEN];

                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );

                errors.push(PBError::Linking(info_log_to_string(&buf)));
            }

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            ProgramBuild {
                program: Program { id: program },
                errors,
            }
        }
    }
}

unsafe fn compile_stage(kind: u32, src: &CString, errors: &mut Vec<PBError>) -> GLuint {
    let shader = gl::CreateShader(kind);

    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );

    gl::CompileShader(shader);

    let mut success: GLint = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut GLint);
    if success != 1 {
        let mut buf = [0_u8; INFO_LOG_LEN];

        gl::GetShaderInfoLog(
            shader,
            INFO_LOG_LEN as i32,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );

        errors.push(PBError::Compilation {
            stage: ShaderStage::from_gl(kind),
            log: info_log_to_string(&buf),
        });
    }

    shader
}

/// Cuts a driver info log at the first NUL and trims trailing whitespace.
fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn from_gl(kind: u32) -> Self {
        match kind {
            gl::VERTEX_SHADER => ShaderStage::Vertex,
            _ => ShaderStage::Fragment,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "Vertex"),
            ShaderStage::Fragment => write!(f, "Fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("shader source contains a NUL byte")]
    InvalidSource(#[from] NulError),
    #[error("{stage} shader failed to compile. {log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("Shader program linker failure. {0}")]
    Linking(String),
}

/// Result of [`ProgramBuilder::build`].
pub struct ProgramBuild {
    pub program: Program,
    pub errors: Vec<PBError>,
}

impl ProgramBuild {
    pub fn is_usable(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Location of a named uniform, -1 if the program has no such active uniform.
    pub fn uniform_location(&self, name: &str) -> GLint {
        let name = match CString::new(name) {
            Ok(n) => n,
            Err(_) => return -1,
        };

        unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) }
    }

    /// Uploads a vec4 to `location` of this program. The program must be bound.
    pub fn set_vec4(&self, location: GLint, value: [f32; 4]) {
        unsafe { gl::Uniform4f(location, value[0], value[1], value[2], value[3]) }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [0_u8; 32];
        buf[..11].copy_from_slice(b"0:1: error\n");

        assert_eq!(info_log_to_string(&buf), "0:1: error");
    }

    #[test]
    fn info_log_without_nul_uses_whole_buffer() {
        assert_eq!(info_log_to_string(b"link"), "link");
    }

    #[test]
    fn nul_in_source_is_rejected() {
        let res = ProgramBuilder::new("void main() {}\0", "void main() {}");

        assert!(matches!(res, Err(PBError::InvalidSource(_))));
    }

    #[test]
    fn compile_error_names_stage() {
        let err = PBError::Compilation {
            stage: ShaderStage::Fragment,
            log: "bad token".into(),
        };

        assert_eq!(err.to_string(), "Fragment shader failed to compile. bad token");
    }
}
