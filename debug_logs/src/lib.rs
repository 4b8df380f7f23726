use std::sync::atomic::{AtomicBool, Ordering};

pub use log;

pub static DO_DEBUG: AtomicBool = AtomicBool::new(false);

/// Installs the process-wide logger. `verbose` raises the default level to
/// debug and turns on [`debug_print!`]; `RUST_LOG` still overrides the level.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    DO_DEBUG.store(verbose, Ordering::SeqCst);
}

pub fn debugging() -> bool {
    DO_DEBUG.load(Ordering::SeqCst)
}

/// Logs `expr = value` at debug level while debugging is on, and evaluates
/// to the value either way.
#[macro_export]
macro_rules! debug_print {
    ( $val:expr ) => {
        match $val {
            tmp => {
                if $crate::debugging() {
                    $crate::log::debug!("{} = {:?}", stringify!($val), &tmp);
                }
                tmp
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test() {
        assert!(!debugging());
        assert_eq!(debug_print!(1 + 1), 2);

        DO_DEBUG.store(true, Ordering::SeqCst);
        assert!(debugging());
        assert_eq!(debug_print!("hi 2"), "hi 2");

        DO_DEBUG.store(false, Ordering::SeqCst);
        assert!(!debugging());
    }
}
