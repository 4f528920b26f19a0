use crate::platform::Platform;
use crate::step::{Action, BuildStep, Cmd};
use std::path::{Path, PathBuf};

/// The fixed list of third-party builds, in dependency order: the
/// meta-build generator first, then the engine project files, then each
/// bundled library through its own build system.
pub fn steps(root: &Path, platform: Platform) -> Vec<BuildStep> {
    vec![
        premake_bootstrap(root, platform),
        generate_project_files(root, platform),
        glfw(root, platform),
        assimp(root),
        spirv_cross(root),
        imgui_checkout(root),
        google_benchmark(root),
    ]
}

fn premake_bootstrap(root: &Path, platform: Platform) -> BuildStep {
    let cmd = match platform {
        Platform::Windows => Cmd::new("cmd", &["/C", "Bootstrap.bat"]),
        Platform::Linux => Cmd::new("make", &[]),
    };
    BuildStep {
        name: "premake",
        cwd: root.join("ThirdParty/premake"),
        actions: vec![Action::Run(cmd)],
    }
}

fn generate_project_files(root: &Path, platform: Platform) -> BuildStep {
    let premake = root
        .join("ThirdParty/premake/bin/release")
        .join(platform.premake_binary_name());
    BuildStep {
        name: "engine project files",
        cwd: root.to_path_buf(),
        actions: vec![Action::Run(Cmd::new(premake, &[platform.premake_action()]))],
    }
}

fn glfw(root: &Path, platform: Platform) -> BuildStep {
    let shared_libs = match platform {
        Platform::Windows => "-DBUILD_SHARED_LIBS=ON",
        Platform::Linux => "-DBUILD_SHARED_LIBS=OFF",
    };
    let mut actions = vec![
        Action::Run(Cmd::new(
            "cmake",
            &[
                "CMakeLists.txt",
                shared_libs,
                "-DGLFW_BUILD_EXAMPLES=OFF",
                "-DGLFW_BUILD_TESTS=OFF",
            ],
        )),
        Action::Run(Cmd::new(
            "cmake",
            &["--build", ".", "--config", "Release"],
        )),
    ];
    // The static archive clashes with premake's -lglfw3 link naming.
    if platform == Platform::Linux {
        actions.push(Action::Rename {
            from: PathBuf::from("src/libglfw3.a"),
            to: PathBuf::from("src/liblibglfw3.a"),
        });
    }
    BuildStep {
        name: "glfw",
        cwd: root.join("ThirdParty/glfw"),
        actions,
    }
}

fn assimp(root: &Path) -> BuildStep {
    BuildStep {
        name: "assimp",
        cwd: root.join("ThirdParty/Assimp"),
        actions: vec![
            Action::Run(Cmd::new(
                "cmake",
                &[
                    "CMakeLists.txt",
                    "-DBUILD_SHARED_LIBS=ON",
                    "-DASSIMP_BUILD_TESTS=OFF",
                ],
            )),
            Action::Run(Cmd::new(
                "cmake",
                &["--build", ".", "--config", "Release"],
            )),
        ],
    }
}

fn spirv_cross(root: &Path) -> BuildStep {
    BuildStep {
        name: "SPIRV-Cross",
        cwd: root.join("ThirdParty/SPIRV-Cross"),
        actions: vec![
            Action::Run(Cmd::new("cmake", &["CMakeLists.txt"])),
            Action::Run(Cmd::new(
                "cmake",
                &["--build", ".", "--config", "Release"],
            )),
        ],
    }
}

fn imgui_checkout(root: &Path) -> BuildStep {
    BuildStep {
        name: "imgui",
        cwd: root.join("Demos/ThirdParty/imgui"),
        actions: vec![Action::Run(Cmd::new("git", &["checkout", "docking"]))],
    }
}

fn google_benchmark(root: &Path) -> BuildStep {
    BuildStep {
        name: "google benchmark",
        cwd: root.join("ThirdParty/benchmark"),
        actions: vec![
            Action::Run(Cmd::new("cmake", &["-E", "make_directory", "build"])),
            Action::Run(Cmd::new(
                "cmake",
                &[
                    "-E",
                    "chdir",
                    "build",
                    "cmake",
                    "-DBENCHMARK_DOWNLOAD_DEPENDENCIES=on",
                    "-DCMAKE_BUILD_TYPE=Release",
                    "../",
                ],
            )),
            Action::Run(Cmd::new(
                "cmake",
                &["--build", "build", "--config", "Release"],
            )),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step<'a>(steps: &'a [BuildStep], name: &str) -> &'a BuildStep {
        steps
            .iter()
            .find(|step| step.name == name)
            .unwrap_or_else(|| panic!("no step named {}", name))
    }

    #[test]
    fn step_list_is_fixed_and_ordered() {
        let steps = steps(Path::new("."), Platform::Linux);
        let names: Vec<_> = steps.iter().map(|step| step.name).collect();
        assert_eq!(
            names,
            vec![
                "premake",
                "engine project files",
                "glfw",
                "assimp",
                "SPIRV-Cross",
                "imgui",
                "google benchmark",
            ]
        );
    }

    #[test]
    fn windows_builds_glfw_shared() {
        let all = steps(Path::new("."), Platform::Windows);
        let glfw = step(&all, "glfw");
        match &glfw.actions[0] {
            Action::Run(cmd) => assert!(cmd.args.contains(&"-DBUILD_SHARED_LIBS=ON".to_string())),
            other => panic!("expected a command, got {:?}", other),
        }
        assert_eq!(glfw.actions.len(), 2);
    }

    #[test]
    fn linux_builds_glfw_static_and_renames_the_archive() {
        let all = steps(Path::new("."), Platform::Linux);
        let glfw = step(&all, "glfw");
        match &glfw.actions[0] {
            Action::Run(cmd) => assert!(cmd.args.contains(&"-DBUILD_SHARED_LIBS=OFF".to_string())),
            other => panic!("expected a command, got {:?}", other),
        }
        assert_eq!(
            glfw.actions[2],
            Action::Rename {
                from: PathBuf::from("src/libglfw3.a"),
                to: PathBuf::from("src/liblibglfw3.a"),
            }
        );
    }

    #[test]
    fn project_files_use_the_platform_action() {
        let all = steps(Path::new("/engine"), Platform::Linux);
        match &step(&all, "engine project files").actions[0] {
            Action::Run(cmd) => {
                assert!(cmd.program.ends_with("premake5"));
                assert_eq!(cmd.args, vec!["gmake2".to_string()]);
            }
            other => panic!("expected a command, got {:?}", other),
        }
    }

    #[test]
    fn imgui_checks_out_the_docking_branch() {
        let all = steps(Path::new("."), Platform::Linux);
        match &step(&all, "imgui").actions[0] {
            Action::Run(cmd) => {
                assert_eq!(cmd.program, PathBuf::from("git"));
                assert_eq!(cmd.args, vec!["checkout".to_string(), "docking".to_string()]);
            }
            other => panic!("expected a command, got {:?}", other),
        }
    }
}
