use crate::{
    field::{Field, FieldSet},
    schedule::{Options, Schedule},
    utils, CronError, Result,
};

/// Parses the whole expression into a [`Schedule`].
pub(crate) fn parse(expression: &str, options: Options) -> Result<Schedule> {
    if expression.is_empty() {
        return Err(CronError::InvalidArgument(0));
    }

    let layout = layout(options);
    let mut values = [FieldSet::EMPTY; 7];
    let mut starred = [false; 7];
    if !options.with_seconds {
        values[Field::Seconds as usize].insert(0);
    }

    let mut parser = Parser::new(expression);
    let mut parsed = 0;
    for field in layout.iter().copied() {
        if parser.is_end() {
            break;
        }
        let (set, is_star) = parser.field(field)?;
        values[field as usize] = set;
        starred[field as usize] = is_star;
        parsed += 1;
        parser.skip_whitespace();
    }

    if !parser.is_end() {
        return Err(CronError::ExprLong(parser.pos));
    }

    if parsed < layout.len() {
        if !options.assume_star {
            return Err(CronError::ExprShort(expression.len()));
        }
        for field in layout[parsed..].iter().copied() {
            values[field as usize] = field.full();
            starred[field as usize] = true;
        }
    }

    let schedule = Schedule::from_parts(
        values,
        options,
        starred[Field::Days as usize],
        starred[Field::Weekdays as usize],
    );

    if !is_possible(&schedule) {
        return Err(CronError::ImpossibleDate(expression.len()));
    }

    Ok(schedule)
}

/// Fields expected in the expression with provided options, in order.
fn layout(options: Options) -> Vec<Field> {
    let mut fields = Vec::with_capacity(7);
    if options.with_seconds {
        fields.push(Field::Seconds);
    }
    fields.extend([Field::Minutes, Field::Hours, Field::Days, Field::Months, Field::Weekdays]);
    if options.with_years {
        fields.push(Field::Years);
    }
    fields
}

/// Returns `false` if days of month can never be met in any allowed month.
///
/// Applies only when the day of week is `*`: otherwise either day of month is `*`
/// or days are matched by either field, and weekdays occur in every month.
fn is_possible(schedule: &Schedule) -> bool {
    if !schedule.day_of_week_starred() || schedule.matches_last_day() {
        return true;
    }

    let Some(first_day) = schedule.days().iter().find(|day| *day > 0) else {
        return true;
    };

    let leap_year_allowed = match schedule.years() {
        Some(years) => years
            .iter()
            .any(|bit| utils::is_leap_year(Field::Years.value(bit) as i32)),
        None => true,
    };

    schedule.months().iter().any(|month| {
        let month_days = if month == 2 && !leap_year_allowed {
            28
        } else {
            utils::max_days_in_month(month as u32)
        };
        first_day as u32 <= month_days
    })
}

/// Cursor over the expression which parses one field at a time.
///
/// Every error points to the character where parsing failed.
#[derive(Debug)]
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Parses comma separated list of items up to whitespace or end of input.
    ///
    /// Returns values of the field and whether the whole field is `*`.
    fn field(&mut self, field: Field) -> Result<(FieldSet, bool)> {
        let start = self.pos;
        let mut set = FieldSet::EMPTY;

        loop {
            self.item(field, &mut set)?;
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(c) if c.is_ascii_whitespace() => break,
                None => break,
                Some(_) => return Err(CronError::FieldFormat(self.pos)),
            }
        }

        Ok((set, &self.input[start..self.pos] == "*"))
    }

    fn item(&mut self, field: Field, set: &mut FieldSet) -> Result<()> {
        match self.peek() {
            Some(b'*') => {
                self.pos += 1;
                let (min, max) = field.min_max();
                let step = self.step(field)?;
                insert_values(set, field, min, max, step);
            }
            Some(b'L') if field == Field::Days => {
                self.pos += 1;
                // bit 0 isn't a valid day, so it marks the last day of month
                set.insert(0);
            }
            _ => {
                let min = self.value(field)?;
                if self.peek() == Some(b'-') {
                    self.pos += 1;
                    let max_pos = self.pos;
                    let max = self.value(field)?;
                    if max < min {
                        return Err(CronError::NumberRange(max_pos));
                    }
                    let step = self.step(field)?;
                    insert_values(set, field, min, max, step);
                } else {
                    set.insert(field.bit(min));
                }
            }
        }

        Ok(())
    }

    /// Optional `/step` suffix of a range, 1 if absent.
    fn step(&mut self, field: Field) -> Result<u16> {
        if self.peek() == Some(b'/') {
            self.pos += 1;
            self.number(1, field.max_input())
        } else {
            Ok(1)
        }
    }

    fn value(&mut self, field: Field) -> Result<u16> {
        match (field.names(), self.peek()) {
            (Some((names, first)), Some(c)) if c.is_ascii_alphabetic() => self.name(names, first),
            _ => self.number(field.min_max().0, field.max_input()),
        }
    }

    fn number(&mut self, min: u16, max: u16) -> Result<u16> {
        let start = self.pos;
        let mut value: u32 = 0;

        while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
            value = value * 10 + (c - b'0') as u32;
            if value > max as u32 {
                return Err(CronError::NumberRange(start));
            }
            self.pos += 1;
        }

        if self.pos == start {
            Err(CronError::NumberExpected(start))
        } else if value < min as u32 {
            Err(CronError::NumberRange(start))
        } else {
            Ok(value as u16)
        }
    }

    /// Three-letter case-insensitive name.
    fn name(&mut self, names: &[&str], first: u16) -> Result<u16> {
        let start = self.pos;
        let len = self.input.as_bytes()[start..]
            .iter()
            .take(3)
            .take_while(|c| c.is_ascii_alphabetic())
            .count();
        let token = &self.input[start..start + len];

        if len == 3 {
            if let Some(index) = names.iter().position(|name| name.eq_ignore_ascii_case(token)) {
                self.pos += len;
                return Ok(index as u16 + first);
            }
        }

        Err(CronError::InvalidName(start))
    }
}

/// Inserts every `step`-th value of `min..=max`.
fn insert_values(set: &mut FieldSet, field: Field, min: u16, max: u16, step: u16) {
    let mut value = min;
    while value <= max {
        set.insert(field.bit(value));
        value += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_reuse::{apply, template};

    fn values(field: Field, expression: &str) -> Vec<u16> {
        let mut parser = Parser::new(expression);
        let (set, _) = parser.field(field).unwrap();
        assert!(parser.is_end(), "field = {field}, expression = {expression}");
        set.iter().map(|bit| field.value(bit)).collect()
    }

    #[rstest]
    #[case(Field::Minutes, "*", (0..=59).collect())]
    #[case(Field::Minutes, "5", vec![5])]
    #[case(Field::Minutes, "3,1", vec![1, 3])]
    #[case(Field::Minutes, "2-5", vec![2, 3, 4, 5])]
    #[case(Field::Minutes, "*/15", vec![0, 15, 30, 45])]
    #[case(Field::Minutes, "0-30/10", vec![0, 10, 20, 30])]
    #[case(Field::Minutes, "3,1,2-5,40-50/4", vec![1, 2, 3, 4, 5, 40, 44, 48])]
    #[case(Field::Minutes, "7-7", vec![7])]
    #[case(Field::Minutes, "10-20/59", vec![10])]
    #[case(Field::Seconds, "57,59", vec![57, 59])]
    #[case(Field::Hours, "*/6", vec![0, 6, 12, 18])]
    #[case(Field::Hours, "23", vec![23])]
    #[case(Field::Days, "*", (1..=31).collect())]
    #[case(Field::Days, "L", vec![0])]
    #[case(Field::Days, "1,15,L", vec![0, 1, 15])]
    #[case(Field::Days, "*/10", vec![1, 11, 21, 31])]
    #[case(Field::Months, "JAN-MAR", vec![1, 2, 3])]
    #[case(Field::Months, "feb", vec![2])]
    #[case(Field::Months, "Feb,1", vec![1, 2])]
    #[case(Field::Months, "*/3", vec![1, 4, 7, 10])]
    #[case(Field::Months, "1-DEC/4", vec![1, 5, 9])]
    #[case(Field::Weekdays, "*", (0..=6).collect())]
    #[case(Field::Weekdays, "7", vec![0])]
    #[case(Field::Weekdays, "5-7", vec![0, 5, 6])]
    #[case(Field::Weekdays, "0-7", (0..=6).collect())]
    #[case(Field::Weekdays, "MON-FRI", vec![1, 2, 3, 4, 5])]
    #[case(Field::Weekdays, "0-TUE", vec![0, 1, 2])]
    #[case(Field::Weekdays, "sat,sun", vec![0, 6])]
    #[case(Field::Years, "2019", vec![2019])]
    #[case(Field::Years, "2060-2063", vec![2060, 2061, 2062, 2063])]
    #[case(Field::Years, "*/20", vec![2000, 2020, 2040, 2060])]
    fn test_field_values(#[case] field: Field, #[case] expression: &str, #[case] expected: Vec<u16>) {
        assert_eq!(values(field, expression), expected, "field = {field}, expression = {expression}");
    }

    #[rstest]
    #[case(Field::Days, "*", true)]
    #[case(Field::Days, "*/1", false)]
    #[case(Field::Days, "*,5", false)]
    #[case(Field::Days, "1-31", false)]
    #[case(Field::Weekdays, "*", true)]
    #[case(Field::Weekdays, "0-6", false)]
    fn test_field_starred(#[case] field: Field, #[case] expression: &str, #[case] expected: bool) {
        let (_, starred) = Parser::new(expression).field(field).unwrap();
        assert_eq!(starred, expected, "field = {field}, expression = {expression}");
    }

    #[test]
    fn test_field_stops_at_whitespace() {
        let mut parser = Parser::new("1,2 3");
        let (set, _) = parser.field(Field::Minutes).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(parser.pos, 3);
        parser.skip_whitespace();
        assert_eq!(parser.pos, 4);
    }

    #[template]
    #[rstest]
    // bad format
    #[case(" * * * * *", Options::DEFAULT, CronError::NumberExpected(0))]
    #[case("a * * * *", Options::DEFAULT, CronError::NumberExpected(0))]
    #[case("ab * * * *", Options::DEFAULT, CronError::NumberExpected(0))]
    #[case("** * * *", Options::DEFAULT, CronError::FieldFormat(1))]
    #[case("*/* * * * *", Options::DEFAULT, CronError::NumberExpected(2))]
    #[case("*/a * * * *", Options::DEFAULT, CronError::NumberExpected(2))]
    #[case("2+2 * * * *", Options::DEFAULT, CronError::FieldFormat(1))]
    #[case("2-- * * * *", Options::DEFAULT, CronError::NumberExpected(2))]
    #[case("-2 * * * *", Options::DEFAULT, CronError::NumberExpected(0))]
    #[case("2-a * * * *", Options::DEFAULT, CronError::NumberExpected(2))]
    #[case("/2 * * * *", Options::DEFAULT, CronError::NumberExpected(0))]
    #[case("1, * * * *", Options::DEFAULT, CronError::NumberExpected(2))]
    #[case("* * * 2-? *", Options::DEFAULT, CronError::NumberExpected(8))]
    #[case("* * * 2-a *", Options::DEFAULT, CronError::InvalidName(8))]
    #[case("* * * 2-Z *", Options::DEFAULT, CronError::InvalidName(8))]
    #[case("* * * + *", Options::DEFAULT, CronError::NumberExpected(6))]
    #[case("* * * b *", Options::DEFAULT, CronError::InvalidName(6))]
    #[case("* * * * a", Options::DEFAULT, CronError::InvalidName(8))]
    #[case("* * * * Z", Options::DEFAULT, CronError::InvalidName(8))]
    #[case("* * * * ?", Options::DEFAULT, CronError::NumberExpected(8))]
    #[case("* * MON * *", Options::DEFAULT, CronError::NumberExpected(4))]
    #[case("* * l * *", Options::DEFAULT, CronError::NumberExpected(4))]
    #[case("* * L/2 * *", Options::DEFAULT, CronError::FieldFormat(5))]
    #[case("* * LW * *", Options::DEFAULT, CronError::FieldFormat(5))]
    #[case("* * * L *", Options::DEFAULT, CronError::InvalidName(6))]
    #[case("L * * * *", Options::DEFAULT, CronError::NumberExpected(0))]
    // number ranges
    #[case("60 * * * *", Options::DEFAULT, CronError::NumberRange(0))]
    #[case("0-60 * * * *", Options::DEFAULT, CronError::NumberRange(2))]
    #[case("59 24 * * *", Options::DEFAULT, CronError::NumberRange(3))]
    #[case("59 0-24 * * *", Options::DEFAULT, CronError::NumberRange(5))]
    #[case("59 23 0 * *", Options::DEFAULT, CronError::NumberRange(6))]
    #[case("59 23 32 * *", Options::DEFAULT, CronError::NumberRange(6))]
    #[case("59 23 0-31 * *", Options::DEFAULT, CronError::NumberRange(6))]
    #[case("59 23 1-32 * *", Options::DEFAULT, CronError::NumberRange(8))]
    #[case("59 23 31 0 *", Options::DEFAULT, CronError::NumberRange(9))]
    #[case("59 23 31 13 *", Options::DEFAULT, CronError::NumberRange(9))]
    #[case("59 23 31 0-12 *", Options::DEFAULT, CronError::NumberRange(9))]
    #[case("59 23 31 1-13 *", Options::DEFAULT, CronError::NumberRange(11))]
    #[case("59 23 31 12 8", Options::DEFAULT, CronError::NumberRange(12))]
    #[case("59 23 31 12 0-8", Options::DEFAULT, CronError::NumberRange(14))]
    #[case("99999999999 * * * *", Options::DEFAULT, CronError::NumberRange(0))]
    #[case("60 59 23 31 12 6", Options::DEFAULT.with_seconds(true), CronError::NumberRange(0))]
    #[case("0-60 59 23 31 12 6", Options::DEFAULT.with_seconds(true), CronError::NumberRange(2))]
    #[case("59 23 31 12 6 1999", Options::DEFAULT.with_years(true), CronError::NumberRange(14))]
    #[case("59 23 31 12 6 1999-2063", Options::DEFAULT.with_years(true), CronError::NumberRange(14))]
    #[case("59 23 31 12 6 2064", Options::DEFAULT.with_years(true), CronError::NumberRange(14))]
    #[case("59 23 31 12 6 2000-2064", Options::DEFAULT.with_years(true), CronError::NumberRange(19))]
    #[case("59 59 23 31 12 6 1999", Options::FULL, CronError::NumberRange(17))]
    #[case("59 59 23 31 12 6 1999-2063", Options::FULL, CronError::NumberRange(17))]
    #[case("59 59 23 31 12 6 2064", Options::FULL, CronError::NumberRange(17))]
    #[case("59 59 23 31 12 6 2000-2064", Options::FULL, CronError::NumberRange(22))]
    // reversed ranges
    #[case("3-2 * * * *", Options::DEFAULT, CronError::NumberRange(2))]
    #[case("* * * DEC-JAN *", Options::DEFAULT, CronError::NumberRange(10))]
    #[case("* * * * 7-1", Options::DEFAULT, CronError::NumberRange(10))]
    // steps
    #[case("*/0 * * * *", Options::DEFAULT, CronError::NumberRange(2))]
    #[case("5-50/0 * * * *", Options::DEFAULT, CronError::NumberRange(5))]
    #[case("*/60 * * * *", Options::DEFAULT, CronError::NumberRange(2))]
    #[case("0/2 * * * *", Options::DEFAULT, CronError::FieldFormat(1))]
    #[case("* 1/2 * * *", Options::DEFAULT, CronError::FieldFormat(3))]
    #[case("* * 2/2 * *", Options::DEFAULT, CronError::FieldFormat(5))]
    #[case("* * * 8/2 *", Options::DEFAULT, CronError::FieldFormat(7))]
    #[case("* * * AUG/2 *", Options::DEFAULT, CronError::FieldFormat(9))]
    #[case("* * * * 2/2", Options::DEFAULT, CronError::FieldFormat(9))]
    #[case("* * * * TUE/2", Options::DEFAULT, CronError::FieldFormat(11))]
    #[case("* * * * * 2010/2", Options::DEFAULT.with_years(true), CronError::FieldFormat(14))]
    // names
    #[case("* * * M *", Options::DEFAULT, CronError::InvalidName(6))]
    #[case("* * * MA *", Options::DEFAULT, CronError::InvalidName(6))]
    #[case("* * * MAN *", Options::DEFAULT, CronError::InvalidName(6))]
    #[case("* * * MAY M", Options::DEFAULT, CronError::InvalidName(10))]
    #[case("* * * MAY MO", Options::DEFAULT, CronError::InvalidName(10))]
    #[case("* * * MAY MOY", Options::DEFAULT, CronError::InvalidName(10))]
    #[case("* * * MAY-AUF MOY", Options::DEFAULT, CronError::InvalidName(10))]
    #[case("* * * MAY-AUG MON-TUF", Options::DEFAULT, CronError::InvalidName(18))]
    #[case("* * * * MONDAY", Options::DEFAULT, CronError::FieldFormat(11))]
    // length
    #[case("", Options::DEFAULT, CronError::InvalidArgument(0))]
    #[case("", Options::DEFAULT.with_assume_star(true), CronError::InvalidArgument(0))]
    #[case("* * * *", Options::DEFAULT, CronError::ExprShort(7))]
    #[case("* * * * ", Options::DEFAULT, CronError::ExprShort(8))]
    #[case("*", Options::DEFAULT, CronError::ExprShort(1))]
    #[case("* * * * *", Options::DEFAULT.with_seconds(true), CronError::ExprShort(9))]
    #[case("* * * * *", Options::DEFAULT.with_years(true), CronError::ExprShort(9))]
    #[case("* * * * * *", Options::DEFAULT, CronError::ExprLong(10))]
    #[case("* * * * *   x", Options::DEFAULT, CronError::ExprLong(12))]
    #[case("* * * * * * * *", Options::FULL, CronError::ExprLong(14))]
    #[case("* * * * * * * *", Options::FULL.with_assume_star(true), CronError::ExprLong(14))]
    // impossible dates
    #[case("* * 30 FEB *", Options::DEFAULT, CronError::ImpossibleDate(12))]
    #[case("* * 31 APR *", Options::DEFAULT, CronError::ImpossibleDate(12))]
    #[case("* * 31 2,4,6,9,11 *", Options::DEFAULT, CronError::ImpossibleDate(19))]
    #[case("* * 30,31 2 *", Options::DEFAULT, CronError::ImpossibleDate(13))]
    #[case("* * 30-31/1 FEB *", Options::DEFAULT, CronError::ImpossibleDate(17))]
    #[case("0 0 29 FEB * 2001", Options::DEFAULT.with_years(true), CronError::ImpossibleDate(17))]
    #[case("0 0 29 FEB * 2001-2003,2005", Options::DEFAULT.with_years(true), CronError::ImpossibleDate(27))]
    #[case("0 0 0 31 APR * 2001", Options::FULL, CronError::ImpossibleDate(19))]
    #[case("* * 31 APR", Options::DEFAULT.with_assume_star(true), CronError::ImpossibleDate(10))]
    fn invalid_expressions(#[case] expression: &str, #[case] options: Options, #[case] error: CronError) {}

    #[apply(invalid_expressions)]
    fn test_parse_error(expression: &str, options: Options, error: CronError) {
        assert_eq!(
            parse(expression, options),
            Err(error),
            "expression = {expression:?}, options = {options:?}"
        );
    }

    #[apply(invalid_expressions)]
    fn test_parse_error_offset_is_inside_input(expression: &str, options: Options, error: CronError) {
        assert!(error.offset() <= expression.len(), "expression = {expression:?}");
        assert_eq!(parse(expression, options).unwrap_err().kind(), error.kind());
    }

    #[rstest]
    #[case("* * 29 FEB *", Options::DEFAULT)]
    #[case("* * 29 FEB * 2004", Options::DEFAULT.with_years(true))]
    #[case("* * 29-31 FEB *", Options::DEFAULT)]
    #[case("* * 28,30 FEB *", Options::DEFAULT)]
    #[case("* * 31 APR,MAY *", Options::DEFAULT)]
    #[case("* * L FEB *", Options::DEFAULT)]
    #[case("* * L,30 FEB * 2001", Options::DEFAULT.with_years(true))]
    #[case("* * 31 APR MON", Options::DEFAULT)]
    #[case("* * 30 FEB 0-6", Options::DEFAULT)]
    #[case("* * 31 APR MON", Options::DEFAULT.with_assume_star(true))]
    fn test_possible_dates(#[case] expression: &str, #[case] options: Options) {
        let result = parse(expression, options);
        assert!(result.is_ok(), "expression = {expression}, result = {result:?}");
    }

    #[test]
    fn test_parse_defaults() {
        let schedule = parse("* *", Options::DEFAULT.with_assume_star(true)).unwrap();
        assert_eq!(schedule, parse("* * * * *", Options::DEFAULT).unwrap());

        let schedule = parse("* 1-10", Options::DEFAULT.with_assume_star(true)).unwrap();
        assert_eq!(schedule, parse("* 1-10 * * *", Options::DEFAULT).unwrap());

        let schedule = parse("0 * 1-10 ", Options::FULL.with_assume_star(true)).unwrap();
        assert_eq!(schedule, parse("0 * 1-10 * * * *", Options::FULL).unwrap());
        assert_eq!(schedule.years().unwrap(), Field::Years.full());
    }

    #[test]
    fn test_parse_layout() {
        let schedule = parse("1 2 3 4 5", Options::DEFAULT).unwrap();
        assert_eq!(schedule.seconds().iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(schedule.minutes().iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(schedule.hours().iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(schedule.days().iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(schedule.months().iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(schedule.weekdays().iter().collect::<Vec<_>>(), vec![5]);
        assert_eq!(schedule.years(), None);

        let schedule = parse("1 2 3 4 5 6 2019", Options::FULL).unwrap();
        assert_eq!(schedule.seconds().iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(schedule.weekdays().iter().collect::<Vec<_>>(), vec![6]);
        assert_eq!(schedule.years().unwrap().iter().collect::<Vec<_>>(), vec![19]);

        let schedule = parse("1\t2  3 \t4 5 ", Options::DEFAULT).unwrap();
        assert_eq!(schedule, parse("1 2 3 4 5", Options::DEFAULT).unwrap());
    }

    #[rstest]
    #[case("* * 2 * *", "* * 2 * *")]
    #[case("57,59 * * * *", "57-59/2 * * * *")]
    #[case("1,3,5 * * * *", "1-6/2 * * * *")]
    #[case("* 4,8,12,16,20 * * *", "* 4-20/4 * * *")]
    #[case("* * * * 0-6", "* * * * TUE,WED,THU,FRI,SAT,SUN,MON")]
    #[case("* * * * 0", "* * * * SUN")]
    #[case("* * * * 0", "* * * * 7")]
    #[case("* * * 1-12 *", "* * * FEB,JAN,MAR,APR,MAY,JUN,JUL,AUG,SEP,OCT,NOV,DEC *")]
    #[case("* * * 1-12 *", "* * * JAN-DEC *")]
    #[case("* * * 2 *", "* * * Feb *")]
    #[case("*  *  * *  1", "* * * * 1")]
    fn test_same_schedules(#[case] left: &str, #[case] right: &str) {
        assert_eq!(
            parse(left, Options::DEFAULT).unwrap(),
            parse(right, Options::DEFAULT).unwrap(),
            "{left} != {right}"
        );
    }

    #[rstest]
    #[case("* * * * *", "* * 1-31 * *")]
    #[case("* * * * *", "* * * * 0-6")]
    #[case("0 * * * *", "0 * * * * *")]
    fn test_different_schedules(#[case] left: &str, #[case] right: &str) {
        let right_options = if right.split_whitespace().count() == 6 {
            Options::DEFAULT.with_seconds(true)
        } else {
            Options::DEFAULT
        };
        assert_ne!(
            parse(left, Options::DEFAULT).unwrap(),
            parse(right, right_options).unwrap(),
            "{left} == {right}"
        );
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(parse("* * * * é", Options::DEFAULT), Err(CronError::NumberExpected(8)));
        assert_eq!(parse("* * * * * é", Options::DEFAULT), Err(CronError::ExprLong(10)));
    }
}
