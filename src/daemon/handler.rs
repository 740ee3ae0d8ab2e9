use super::request::{Calculation, Request};
use super::response::Response;
use crate::error::EquityResult;
use crate::lookup::Lookup;
use crate::simulation::{Engine, Odds};
use std::io::{BufRead, Write};

/// The persistent request loop: LOADING -> READY -> (COMPUTING -> READY)*
/// -> TERMINATED. Construction requires an already-loaded Lookup, so a
/// Daemon that exists is past the only fatal state. One command line in,
/// one response line out, each response flushed before the next read; a
/// bad request becomes an error response and the loop keeps serving.
pub struct Daemon(Lookup);

impl From<Lookup> for Daemon {
    fn from(lookup: Lookup) -> Self {
        Self(lookup)
    }
}

impl Daemon {
    pub fn run(self) -> EquityResult<()> {
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        self.serve(stdin, stdout)
    }

    fn serve<R, W>(&self, reader: R, mut writer: W) -> EquityResult<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(writer, "READY")?;
        writer.flush()?;
        log::info!("daemon ready");
        for line in reader.lines() {
            let line = line?;
            let response = match Request::try_from(line.as_str()) {
                Ok(Request::Exit) => {
                    log::info!("exit requested");
                    break;
                }
                Ok(Request::Calculate(calculation)) => self.calculate(&calculation),
                Err(error) => Response::from(error),
            };
            writeln!(
                writer,
                "{}",
                serde_json::to_string(&response).expect("serialize response")
            )?;
            writer.flush()?;
        }
        log::info!("daemon terminated");
        Ok(())
    }

    fn calculate(&self, calculation: &Calculation) -> Response {
        let clock = std::time::Instant::now();
        let mut engine = Engine::from(&self.0);
        match engine.calculate(
            calculation.trials,
            &calculation.board,
            &[calculation.hole],
            calculation.opponents,
        ) {
            Err(error) => Response::from(error),
            Ok(tallies) => {
                let odds = Odds::from_tally(&tallies[0], calculation.trials);
                log::debug!(
                    "{} trials vs {} opponents in {:?}",
                    calculation.trials,
                    calculation.opponents,
                    clock.elapsed()
                );
                Response::from((odds, calculation.trials))
            }
        }
    }
}
