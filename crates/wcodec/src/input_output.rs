use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
};

/// A path argument; `None` and `"-"` both select standard io.
fn file_path(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug, Default)]
pub struct InputArgs {
    /// Input file, one sentence (or score sequence) per line; "-" for stdin.
    #[arg(long)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match file_path(&self.input) {
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
            None => Box::new(BufReader::new(io::stdin().lock())),
        })
    }

    /// Iterate over the input lines, numbered from 1.
    pub fn lines(&self) -> io::Result<impl Iterator<Item = (usize, io::Result<String>)>> {
        Ok(self.open_reader()?.lines().enumerate().map(|(idx, line)| (idx + 1, line)))
    }
}

/// Output argument group.
#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Output file; "-" for stdout.
    #[arg(long)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// A short description of the output target, for logging.
    pub fn describe(&self) -> &str {
        file_path(&self.output).unwrap_or("<stdout>")
    }

    /// Open a writer for the output.
    pub fn open_writer(&self) -> io::Result<Box<dyn Write>> {
        Ok(match file_path(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        })
    }
}
