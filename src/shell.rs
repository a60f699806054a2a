//! Interactive menu shell
//!
//! Thin dispatch layer over [`Explorer`]: prints the numbered menu, reads a
//! choice, invokes the operation, and reports the result. Every operation
//! failure is printed and control returns to the menu; only end-of-input
//! ends the session.
//!
//! Generic over its streams so whole sessions can be scripted in tests with
//! `Cursor` input and `NoColor<Vec<u8>>` output.

use std::io::{self, BufRead, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::explorer::Explorer;
use crate::output;

const MENU: &[&str] = &[
    "1. List entries",
    "2. Change directory",
    "3. Create file",
    "4. Delete file",
    "5. Rename or move",
    "6. Copy file",
    "7. Search by name",
    "8. Permissions",
    "9. Quit",
];

enum Outcome {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    explorer: Explorer,
}

impl<R: BufRead, W: WriteColor> Shell<R, W> {
    pub fn new(explorer: Explorer, input: R, out: W) -> Self {
        Self {
            input,
            out,
            explorer,
        }
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                return self.farewell();
            };
            let outcome = match line.trim().parse::<u32>() {
                Ok(1) => self.cmd_list()?,
                Ok(2) => self.cmd_change_dir()?,
                Ok(3) => self.cmd_create()?,
                Ok(4) => self.cmd_delete()?,
                Ok(5) => self.cmd_rename()?,
                Ok(6) => self.cmd_copy()?,
                Ok(7) => self.cmd_search()?,
                Ok(8) => self.cmd_permissions()?,
                Ok(9) => Outcome::Quit,
                _ => {
                    writeln!(self.out, "invalid choice, enter a number between 1 and 9")?;
                    Outcome::Continue
                }
            };
            if let Outcome::Quit = outcome {
                return self.farewell();
            }
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(self.out, "rove - {}", self.explorer.current_dir().display())?;
        self.out.reset()?;
        for item in MENU {
            writeln!(self.out, "  {}", item)?;
        }
        write!(self.out, "choice: ")?;
        self.out.flush()
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "bye")
    }

    /// Read one line. `None` means end of input (session over).
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF mid-prompt still needs the prompt line terminated.
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;
        self.read_line()
    }

    fn cmd_list(&mut self) -> io::Result<Outcome> {
        let dir = self.explorer.current_dir().to_path_buf();
        match self.explorer.list() {
            Ok(entries) => output::write_listing(&mut self.out, &dir, &entries)?,
            Err(e) => output::write_error(&mut self.out, &e)?,
        }
        Ok(Outcome::Continue)
    }

    fn cmd_change_dir(&mut self) -> io::Result<Outcome> {
        let Some(path) = self.prompt("directory path")? else {
            return Ok(Outcome::Quit);
        };
        if path.trim().is_empty() {
            writeln!(self.out, "nothing entered")?;
            return Ok(Outcome::Continue);
        }
        match self.explorer.change_dir(&path) {
            Ok(dir) => {
                let dir = dir.to_path_buf();
                writeln!(self.out, "now in {}", dir.display())?;
            }
            Err(e) => output::write_error(&mut self.out, &e)?,
        }
        Ok(Outcome::Continue)
    }

    fn cmd_create(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt("file name")? else {
            return Ok(Outcome::Quit);
        };
        if name.trim().is_empty() {
            writeln!(self.out, "nothing entered")?;
            return Ok(Outcome::Continue);
        }
        match self.explorer.create(&name) {
            Ok(path) => writeln!(self.out, "created {}", path.display())?,
            Err(e) => output::write_error(&mut self.out, &e)?,
        }
        Ok(Outcome::Continue)
    }

    fn cmd_delete(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt("file to delete")? else {
            return Ok(Outcome::Quit);
        };
        if name.trim().is_empty() {
            writeln!(self.out, "nothing entered")?;
            return Ok(Outcome::Continue);
        }
        match self.explorer.delete(&name) {
            Ok(path) => writeln!(self.out, "deleted {}", path.display())?,
            Err(e) => output::write_error(&mut self.out, &e)?,
        }
        Ok(Outcome::Continue)
    }

    fn cmd_rename(&mut self) -> io::Result<Outcome> {
        let Some(from) = self.prompt("current name")? else {
            return Ok(Outcome::Quit);
        };
        let Some(to) = self.prompt("new name or path")? else {
            return Ok(Outcome::Quit);
        };
        if from.trim().is_empty() || to.trim().is_empty() {
            writeln!(self.out, "nothing entered")?;
            return Ok(Outcome::Continue);
        }
        match self.explorer.rename(&from, &to) {
            Ok((from, to)) => {
                writeln!(self.out, "moved {} to {}", from.display(), to.display())?
            }
            Err(e) => output::write_error(&mut self.out, &e)?,
        }
        Ok(Outcome::Continue)
    }

    fn cmd_copy(&mut self) -> io::Result<Outcome> {
        let Some(source) = self.prompt("source file")? else {
            return Ok(Outcome::Quit);
        };
        let Some(dest) = self.prompt("destination file")? else {
            return Ok(Outcome::Quit);
        };
        if source.trim().is_empty() || dest.trim().is_empty() {
            writeln!(self.out, "nothing entered")?;
            return Ok(Outcome::Continue);
        }
        match self.explorer.copy(&source, &dest) {
            Ok(bytes) => writeln!(self.out, "copied {}", output::format_size(bytes))?,
            Err(e) => output::write_error(&mut self.out, &e)?,
        }
        Ok(Outcome::Continue)
    }

    fn cmd_search(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt("file name to search")? else {
            return Ok(Outcome::Quit);
        };
        if name.trim().is_empty() {
            writeln!(self.out, "nothing entered")?;
            return Ok(Outcome::Continue);
        }
        let matches = self.explorer.search(name.trim());
        output::write_search_results(&mut self.out, name.trim(), &matches)?;
        Ok(Outcome::Continue)
    }

    fn cmd_permissions(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt("file name")? else {
            return Ok(Outcome::Quit);
        };
        if name.trim().is_empty() {
            writeln!(self.out, "nothing entered")?;
            return Ok(Outcome::Continue);
        }
        let perms = match self.explorer.permissions(&name) {
            Ok(p) => p,
            Err(e) => {
                output::write_error(&mut self.out, &e)?;
                return Ok(Outcome::Continue);
            }
        };
        writeln!(self.out, "permissions: {} ({:03o})", perms, perms.bits())?;

        let Some(answer) = self.prompt("change permissions? [y/N]")? else {
            return Ok(Outcome::Quit);
        };
        if !matches!(answer.trim(), "y" | "Y") {
            return Ok(Outcome::Continue);
        }

        let Some(octal) = self.prompt("new permissions (octal, e.g. 755)")? else {
            return Ok(Outcome::Quit);
        };
        match self.explorer.set_permissions(&name, &octal) {
            Ok(p) => writeln!(self.out, "permissions updated: {} ({:03o})", p, p.bits())?,
            Err(e) => output::write_error(&mut self.out, &e)?,
        }
        Ok(Outcome::Continue)
    }
}
