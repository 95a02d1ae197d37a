/// Amount of work done by a generator, reported after every carved passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn new(done: usize, from: usize) -> Self {
        Self {
            done,
            from,
            is_done: false,
        }
    }

    pub fn percent(&self) -> f32 {
        if self.from == 0 {
            return 1.0;
        }

        self.done as f32 / self.from as f32
    }

    pub fn finish(&mut self) {
        self.done = self.from;
        self.is_done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent() {
        let mut progress = Progress::new(1, 4);
        assert_eq!(progress.percent(), 0.25);

        progress.finish();
        assert!(progress.is_done);
        assert_eq!(progress.percent(), 1.0);
        assert_eq!(Progress::new(0, 0).percent(), 1.0);
    }
}
