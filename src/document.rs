//! LaTeX source for a whole year, one month per landscape page.

use std::fmt::Write;

use crate::calendar::{self, MonthShape};
use crate::grid::{GridCell, Spacing};

pub const HEADER: &str = r"
\documentclass{article}
\usepackage[landscape, margin=0.5in]{geometry}
\usepackage{mathpazo}
\usepackage[letterspace=50]{microtype}
\usepackage{tabularx}

\newcommand{\dayformat}[1]{\hfil{{#1}}\hfil}
\newcommand{\daytitles}{
  \dayformat{Sunday} & \dayformat{Monday} & \dayformat{Tuesday} &
  \dayformat{Wednesday} & \dayformat{Thursday} & \dayformat{Friday} &
  \dayformat{Saturday}\\\hline
}
\newcommand{\cday}[1]{\hfill\textbf{#1}}
\newcommand{\monthtop}[1]{{\Huge #1}\smallskip}
\newcommand{\monthbottom}[1]{\smallskip\hfill{\Huge #1}}

\setlength\parindent{0pt}
\pagestyle{empty}

\begin{document}
\Large
";

pub const FOOTER: &str = r"
\end{document}
";

const NORMAL_ROW_HEIGHT: &str = "1in";
const COMPACT_ROW_HEIGHT: &str = "0.375in";

/// Translates grid cells into the body of a seven column `tabularx`.
pub fn table_body(cells: &[GridCell]) -> String {
    let mut body = String::new();
    let mut cells = cells.iter().peekable();

    while let Some(cell) = cells.next() {
        match cell {
            GridCell::DayLabel(day) => {
                let _ = write!(body, r"\cday{{{}}}", day);
            }
            GridCell::ColumnSeparator => body.push('&'),
            GridCell::RowBreak(Spacing::Normal) => {
                let _ = writeln!(body, r"\\[{}]\hline", NORMAL_ROW_HEIGHT);
            }
            GridCell::RowBreak(Spacing::Compact) => {
                let _ = write!(body, r"\\[{}]", COMPACT_ROW_HEIGHT);
                // A partial divider draws its own rule below this row.
                if !matches!(cells.peek(), Some(GridCell::PartialRowDivider(_))) {
                    body.push_str(r"\hline");
                }
                body.push('\n');
            }
            GridCell::PartialRowDivider(columns) => {
                let _ = write!(body, r"\cline{{1-{}}}", columns);
            }
        }
    }

    body
}

/// One page: title, weekday header, day grid and title again.
pub fn month_section(shape: &MonthShape) -> String {
    let title = shape.title();
    let cells = shape.grid();
    log::debug!(
        "{}: starts on {}, {} days, {} cells",
        title,
        shape.first_weekday,
        shape.days,
        cells.len()
    );

    format!(
        concat!(
            "\n",
            r"\monthtop{{{title}}}\par",
            "\n",
            r"\begin{{tabularx}}{{\textwidth}}{{|X|X|X|X|X|X|X|}}\hline",
            "\n",
            r"  \daytitles",
            "\n",
            "{body}",
            r"\end{{tabularx}}\par",
            "\n",
            r"\monthbottom{{{title}}}",
            "\n",
            r"\clearpage",
            "\n",
        ),
        title = title,
        body = table_body(&cells),
    )
}

/// Complete document for all twelve months of `year`.
pub fn assemble(year: i32) -> String {
    let mut document = String::from(HEADER);
    for shape in calendar::months(year) {
        document.push_str(&month_section(&shape));
    }
    document.push_str(FOOTER);
    document
}
