use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_VERTEX: &str = include_str!("../shaders/vs_uniform.glsl");
pub const DEFAULT_FRAGMENT: &str = include_str!("../shaders/fs_uniform.glsl");

#[derive(Debug, Error)]
pub enum ShaderSourceError {
    #[error("could not read shader {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where a shader text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(PathBuf),
    Embedded,
}

pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
    pub vertex_origin: Origin,
    pub fragment_origin: Origin,
}

pub fn read_shader<P: AsRef<Path>>(path: P) -> Result<String, ShaderSourceError> {
    let path = path.as_ref();

    std::fs::read_to_string(path).map_err(|source| ShaderSourceError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Reads both shader stages, substituting the embedded source for any file
/// that cannot be read.
pub fn load_or_embedded(vertex: &Path, fragment: &Path) -> ShaderSources {
    let (vertex, vertex_origin) = with_fallback(vertex, DEFAULT_VERTEX);
    let (fragment, fragment_origin) = with_fallback(fragment, DEFAULT_FRAGMENT);

    ShaderSources {
        vertex,
        fragment,
        vertex_origin,
        fragment_origin,
    }
}

fn with_fallback(path: &Path, embedded: &str) -> (String, Origin) {
    match read_shader(path) {
        Ok(src) => (src, Origin::File(path.to_owned())),
        Err(e) => {
            log::warn!("{e}, using built-in shader");
            (embedded.to_string(), Origin::Embedded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_fall_back() {
        let sources = load_or_embedded(
            Path::new("does/not/exist/vs.glsl"),
            Path::new("does/not/exist/fs.glsl"),
        );

        assert_eq!(sources.vertex, DEFAULT_VERTEX);
        assert_eq!(sources.fragment, DEFAULT_FRAGMENT);
        assert_eq!(sources.vertex_origin, Origin::Embedded);
        assert_eq!(sources.fragment_origin, Origin::Embedded);
    }

    #[test]
    fn reads_file_when_present() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders/vs_uniform.glsl");
        let sources = load_or_embedded(&path, Path::new("does/not/exist/fs.glsl"));

        assert_eq!(sources.vertex, DEFAULT_VERTEX);
        assert_eq!(sources.vertex_origin, Origin::File(path));
        assert_eq!(sources.fragment_origin, Origin::Embedded);
    }

    #[test]
    fn read_error_names_path() {
        let err = read_shader("missing.glsl").unwrap_err();

        assert!(err.to_string().contains("missing.glsl"));
    }

    #[test]
    fn embedded_shaders_use_uniforms() {
        assert!(DEFAULT_VERTEX.contains("ourPosition"));
        assert!(DEFAULT_FRAGMENT.contains("ourColor"));
    }
}
