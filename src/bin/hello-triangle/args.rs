use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Indexed quad with keyboard driven color and movement")]
pub struct Args {
    /// Initial window width
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
    /// Initial window height
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
    /// Vertex shader file, the built-in shader is used when it cannot be read
    #[arg(long, default_value = "shaders/vs_uniform.glsl")]
    pub vertex_shader: PathBuf,
    /// Fragment shader file, the built-in shader is used when it cannot be read
    #[arg(long, default_value = "shaders/fs_uniform.glsl")]
    pub fragment_shader: PathBuf,
    /// Present frames as soon as they are drawn instead of waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["hello-triangle"]).unwrap();

        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.vertex_shader, PathBuf::from("shaders/vs_uniform.glsl"));
        assert_eq!(args.fragment_shader, PathBuf::from("shaders/fs_uniform.glsl"));
        assert!(!args.no_vsync);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Args::try_parse_from(["hello-triangle", "--width", "0"]).is_err());
    }
}
