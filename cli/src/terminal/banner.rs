use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                        __
     ____  ____  _____/ /________      _____  ___  ____
    / __ \/ __ \/ ___/ __/ ___/ | /| / / _ \/ _ \/ __ \
   / /_/ / /_/ / /  / /_(__  )| |/ |/ /  __/  __/ /_/ /
  / .___/\____/_/   \__/____/ |__/|__/\___/\___/ .___/
 /_/                                          /_/
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
