use std::path::Path;

use crate::error::Result;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a tab-separated record file
/// to [`Sample`].
/// # Example
/// The following code is a simple example to read a record file.
/// ```no_run
/// use tritree::SampleReader;
/// let filename = "/path/to/voting-data.tsv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .read()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct SampleReader<P> {
    file: Option<P>,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self { file: None, }
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns the [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .expect("The file name of the record file is not set");
        Sample::from_tsv(file)
    }
}
