use std::time::Instant;

/// Play-session statistics shown in the header: best score so far, number
/// of runs, and how long the current run has lasted.
pub struct SessionStats {
    run_start: Instant,
    runs_played: u32,
    high_score: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            run_start: Instant::now(),
            runs_played: 0,
            high_score: 0,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn runs_played(&self) -> u32 {
        self.runs_played
    }

    pub fn on_run_start(&mut self) {
        self.run_start = Instant::now();
    }

    pub fn on_run_over(&mut self, final_score: u32) {
        self.runs_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Current run time as mm:ss
    pub fn run_time(&self) -> String {
        let total_secs = self.run_start.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
