use anyhow::Result;

/// Platforms the bootstrap knows how to drive toolchains on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    pub fn detect() -> Result<Self> {
        cfg_if::cfg_if! {
            if #[cfg(target_os = "windows")] {
                Ok(Platform::Windows)
            } else if #[cfg(target_os = "linux")] {
                Ok(Platform::Linux)
            } else {
                anyhow::bail!("unsupported platform: {}", std::env::consts::OS)
            }
        }
    }

    /// The project-file action handed to the meta-build generator.
    pub fn premake_action(self) -> &'static str {
        match self {
            Platform::Windows => "vs2022",
            Platform::Linux => "gmake2",
        }
    }

    pub fn premake_binary_name(self) -> &'static str {
        match self {
            Platform::Windows => "premake5.exe",
            Platform::Linux => "premake5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_match_platform_toolchains() {
        assert_eq!(Platform::Windows.premake_action(), "vs2022");
        assert_eq!(Platform::Linux.premake_action(), "gmake2");
    }

    #[test]
    fn windows_binary_carries_the_exe_suffix() {
        assert_eq!(Platform::Windows.premake_binary_name(), "premake5.exe");
        assert_eq!(Platform::Linux.premake_binary_name(), "premake5");
    }
}
