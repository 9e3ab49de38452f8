use textwrap::Options;

/// Everything shown to the user so far, oldest first. Append-only.
#[derive(Debug, Default, Clone)]
pub struct DisplayLog {
    entries: Vec<String>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: &str) {
        self.entries.push(entry.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Wraps every entry to `width` columns for display.
    pub fn visual_lines(&self, width: u16) -> Vec<String> {
        let width = (width as usize).max(1);
        let options = Options::new(width).break_words(true);

        self.entries
            .iter()
            .flat_map(|entry| {
                textwrap::wrap(entry, &options)
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
