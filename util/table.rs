/// A plain text table for terminal output.
pub struct Table<'a> {
	pub padding: usize,
	pub header: &'a [&'a str],
	pub rows: &'a [Vec<String>],
}

impl<'a> std::fmt::Display for Table<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let mut column_widths: Vec<usize> = self.header.iter().map(|header| width(header)).collect();
		for row in self.rows {
			for (column_width, value) in column_widths.iter_mut().zip(row) {
				*column_width = usize::max(*column_width, width(value));
			}
		}
		let line = Line {
			column_widths: &column_widths,
			padding: self.padding,
		};
		let header = Row {
			column_widths: &column_widths,
			padding: self.padding,
			values: self.header.iter().copied(),
		};
		writeln!(f, "{}", header)?;
		writeln!(f, "{}", line)?;
		for row in self.rows {
			let row = Row {
				column_widths: &column_widths,
				padding: self.padding,
				values: row.iter().map(|value| value.as_str()),
			};
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

fn width(value: &str) -> usize {
	value.chars().count()
}

struct Line<'a> {
	column_widths: &'a [usize],
	padding: usize,
}

impl<'a> std::fmt::Display for Line<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "|")?;
		for column_width in self.column_widths.iter() {
			write!(f, "{}|", "-".repeat(column_width + 2 * self.padding))?;
		}
		Ok(())
	}
}

struct Row<'a, I> {
	column_widths: &'a [usize],
	padding: usize,
	values: I,
}

impl<'a, 'b, I> std::fmt::Display for Row<'a, I>
where
	I: Iterator<Item = &'b str> + Clone,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let padding = " ".repeat(self.padding);
		write!(f, "|")?;
		for (column_width, value) in self.column_widths.iter().zip(self.values.clone()) {
			let fill = " ".repeat(column_width - width(value));
			write!(f, "{}{}{}{}|", padding, value, fill, padding)?;
		}
		Ok(())
	}
}

#[test]
fn test_table() {
	let rows = vec![
		vec!["0".to_owned(), "0.96".to_owned()],
		vec!["1".to_owned(), "0.93".to_owned()],
	];
	let table = Table {
		padding: 1,
		header: &["Class", "Precision"],
		rows: &rows,
	};
	let expected = "\
| Class | Precision |
|-------|-----------|
| 0     | 0.96      |
| 1     | 0.93      |
";
	assert_eq!(table.to_string(), expected);
}
