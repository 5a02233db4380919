use crate::errors::{MdError, Result};

pub trait ArgsExt {
    fn get_required(&self, index: usize, line: usize) -> Result<&str>;
    fn parse_int_at(&self, index: usize, line: usize) -> Result<i64>;
    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64>;

    /// Non-negative integer, e.g. a particle or step count.
    fn parse_count_at(&self, index: usize, line: usize) -> Result<usize> {
        self.parse_int_at(index, line)?.convert_to_usize(line)
    }

    /// Every argument from `index` on as a float; at least one is required.
    fn parse_floats_from(&self, index: usize, line: usize) -> Result<Vec<f64>>;
}

impl ArgsExt for [&str] {
    fn get_required(&self, index: usize, line: usize) -> Result<&str> {
        self.get(index)
            .copied()
            .ok_or(MdError::MissingArgument { line })
    }

    fn parse_int_at(&self, index: usize, line: usize) -> Result<i64> {
        let arg = self.get_required(index, line)?;
        arg.parse().map_err(|e| MdError::IntParseError {
            string: arg.to_string(),
            source: e,
        })
    }

    fn parse_float_at(&self, index: usize, line: usize) -> Result<f64> {
        let arg = self.get_required(index, line)?;
        arg.parse().map_err(|e| MdError::FloatParseError {
            string: arg.to_string(),
            source: e,
        })
    }

    fn parse_floats_from(&self, index: usize, line: usize) -> Result<Vec<f64>> {
        self.get_required(index, line)?;
        (index..self.len())
            .map(|i| self.parse_float_at(i, line))
            .collect()
    }
}

pub trait Int64ToUsize {
    fn convert_to_usize(&self, line: usize) -> Result<usize>;
}

impl Int64ToUsize for i64 {
    fn convert_to_usize(&self, line: usize) -> Result<usize> {
        (*self)
            .try_into()
            .map_err(|_| MdError::NegativeValue { value: *self, line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_reports_line() {
        let args: Vec<&str> = vec!["1.0"];
        let err = args.parse_float_at(1, 7).unwrap_err();
        assert!(matches!(err, MdError::MissingArgument { line: 7 }));
    }

    #[test]
    fn negative_count_is_rejected() {
        let args: Vec<&str> = vec!["-4"];
        let value = args.parse_int_at(0, 3).unwrap();
        let err = value.convert_to_usize(3).unwrap_err();
        assert!(matches!(err, MdError::NegativeValue { value: -4, line: 3 }));
    }

    #[test]
    fn floats_from_offset() {
        let args: Vec<&str> = vec!["create", "1.5", "2", "-0.25"];
        assert_eq!(args.parse_floats_from(1, 1).unwrap(), vec![1.5, 2.0, -0.25]);
        assert!(matches!(
            args.parse_floats_from(4, 9),
            Err(MdError::MissingArgument { line: 9 })
        ));
    }

    #[test]
    fn float_parse_error_keeps_the_string() {
        let args: Vec<&str> = vec!["abc"];
        match args.parse_float_at(0, 1) {
            Err(MdError::FloatParseError { string, .. }) => assert_eq!(string, "abc"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
