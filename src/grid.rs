//! Layout of a single month as a seven column table.
//!
//! A month normally spans five week rows. Depending on the weekday of the 1st
//! up to two days spill into a sixth row; in that case rows five and six are
//! drawn compact so that every page ends up the same height. The one month
//! that fits four rows exactly (a 28 day February starting on Sunday) gets an
//! extra blank row for the same reason.

const COLUMNS: u32 = 7;
const FULL_ROWS: u32 = 5;

/// Vertical space below a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Normal,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    DayLabel(u32),
    ColumnSeparator,
    RowBreak(Spacing),
    /// Horizontal rule under the first `n` columns only, placed before the
    /// overflow row.
    PartialRowDivider(u32),
}

/// Number of days that do not fit into five week rows.
pub fn overflow(start_weekday: u32, day_count: u32) -> u32 {
    (start_weekday + day_count).saturating_sub(FULL_ROWS * COLUMNS)
}

/// Builds the cell sequence for a month whose 1st falls on `start_weekday`
/// (0 = Sunday) and which has `day_count` days.
pub fn build_month_grid(start_weekday: u32, day_count: u32) -> Vec<GridCell> {
    debug_assert!(start_weekday < COLUMNS);
    debug_assert!((28..=31).contains(&day_count));

    let blanks = start_weekday;
    let overflow = overflow(blanks, day_count);
    let row_spacing = |row: u32| {
        if row >= FULL_ROWS - 1 && overflow > 0 {
            Spacing::Compact
        } else {
            Spacing::Normal
        }
    };

    let mut cells = vec![GridCell::ColumnSeparator; blanks as usize];
    let mut divider_added = false;

    for day in 1..=day_count {
        let row = (blanks + day - 1) / COLUMNS;

        if row == FULL_ROWS && !divider_added {
            cells.push(GridCell::PartialRowDivider(overflow));
            divider_added = true;
        }

        cells.push(GridCell::DayLabel(day));

        if day == day_count {
            let filled = (day + blanks) % COLUMNS;
            if filled != 0 {
                for _ in filled..COLUMNS {
                    cells.push(GridCell::ColumnSeparator);
                }
            }

            if row == FULL_ROWS - 2 {
                // Four rows only: pad with a blank row of normal height.
                cells.push(GridCell::RowBreak(Spacing::Normal));
                for _ in 1..COLUMNS {
                    cells.push(GridCell::ColumnSeparator);
                }
                cells.push(GridCell::RowBreak(Spacing::Normal));
            } else {
                cells.push(GridCell::RowBreak(row_spacing(row)));
            }
        } else if (day + blanks) % COLUMNS != 0 {
            cells.push(GridCell::ColumnSeparator);
        } else {
            cells.push(GridCell::RowBreak(row_spacing(row)));
        }
    }

    cells
}
