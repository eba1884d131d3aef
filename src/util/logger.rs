use super::{Code, Log};
use std::fmt::{Display, Formatter};

impl<T: Display> Display for Log<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Log::None => Ok(()),
            Log::Default(s) | Log::Success(s) | Log::Result(s) | Log::Verbose(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl<T> Log<T> {
    /// Function which return order of the log.
    pub fn order(&self) -> u8 {
        match self {
            Log::None => 0,
            Log::Default(_) => 1,
            Log::Success(_) => 2,
            Log::Result(_) => 3,
            Log::Verbose(_) => 4,
        }
    }
}

impl Log<&'static str> {
    /// Log entry into a grammar production when verbose debugging is enabled.
    pub fn log_enter(&self, what: &str, code: &Code, pointer: usize) {
        #[cfg(debug_assertions)]
        if self.order() >= Log::Verbose(()).order() {
            println!(
                "[{}; Enter]: {} at {}",
                self,
                what,
                code.obtain_position(pointer)
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (what, code, pointer);
    }

    /// Log a reported diagnostic.
    pub fn log_diagnostic(&self, message: &str, code: &Code, pointer: usize) {
        #[cfg(debug_assertions)]
        if self.order() >= Log::Result(()).order() {
            println!(
                "[{}; Diagnostic]: {} at {}",
                self,
                message,
                code.obtain_position(pointer)
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (message, code, pointer);
    }

    /// Log a re-synchronization jump after a recoverable parsing error.
    pub fn log_recovery(&self, code: &Code, from: usize, to: usize) {
        #[cfg(debug_assertions)]
        if self.order() >= Log::Default(()).order() {
            println!(
                "[{}; Recovery]: skipped {} -> {}",
                self,
                code.obtain_position(from),
                code.obtain_position(to)
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (code, from, to);
    }
}
