use std::fs;
use std::path::{Component, Path, PathBuf};

/// Writes generated declaration files into one output directory
pub struct FileWriter {
    output_path: PathBuf,
    generated_files: Vec<String>,
}

impl FileWriter {
    /// Creates the output directory if it does not exist yet
    pub fn new<P: AsRef<Path>>(output_path: P) -> crate::Result<Self> {
        let output_path = output_path.as_ref().to_path_buf();
        if !output_path.as_os_str().is_empty() {
            fs::create_dir_all(&output_path)?;
        }
        Ok(Self {
            output_path,
            generated_files: Vec::new(),
        })
    }

    /// Write `content` to `filename` and return the path it was written to
    pub fn write_file(&mut self, filename: &str, content: &str) -> crate::Result<PathBuf> {
        let relative = Path::new(filename);
        if relative.is_absolute() || relative.components().any(|c| c == Component::ParentDir) {
            return Err(crate::Error::CodeGeneration(format!(
                "output file {} must stay inside {}",
                filename,
                self.output_path.display()
            )));
        }

        let file_path = self.get_file_path(filename);
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&file_path, content)?;
        self.generated_files.push(filename.to_string());
        Ok(file_path)
    }

    /// Get the list of generated files
    pub fn get_generated_files(&self) -> &[String] {
        &self.generated_files
    }

    pub fn get_output_path(&self) -> &Path {
        &self.output_path
    }

    /// Check if a file exists in the output directory
    pub fn file_exists(&self, filename: &str) -> bool {
        self.get_file_path(filename).exists()
    }

    /// Get the full path to a file in the output directory
    pub fn get_file_path(&self, filename: &str) -> PathBuf {
        self.output_path.join(filename)
    }
}
