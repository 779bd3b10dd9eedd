#![allow(dead_code)]
/// Common test utilities and helpers
use custom_elements_typegen::{generate_from_config, GenerateConfig, Logger, Manifest, Options, SolidTypeGenerator};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A manifest written into a scratch directory, generated into the same directory
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, name: &str, content: &str) -> &Self {
        let file_path = self.temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file_path, content).unwrap();
        self
    }

    pub fn write_manifest(&self, content: &str) -> &Self {
        self.write_file("custom-elements.json", content)
    }

    pub fn path(&self, name: &str) -> String {
        self.temp_dir.path().join(name).to_string_lossy().to_string()
    }

    /// Config pointing at this project's manifest, writing into `types/`
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            manifest: Some(self.path("custom-elements.json")),
            outdir: Some(self.path("types")),
            ..Default::default()
        }
    }

    pub fn generate(&self, config: &GenerateConfig) -> (PathBuf, String) {
        let output = generate_from_config(config, &Logger::quiet()).unwrap();
        let content = fs::read_to_string(&output).unwrap();
        (output, content)
    }
}

/// Render a manifest in memory
pub fn render(manifest: &str, config: GenerateConfig) -> String {
    let manifest = Manifest::from_json(manifest).unwrap();
    let options: Options = config.resolve();
    SolidTypeGenerator::new(&options)
        .unwrap()
        .render(&manifest)
        .unwrap()
}
