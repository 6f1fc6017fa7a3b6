// Warning/critical range expressions (Nagios range syntax)
//
//   N      alert if value < 0 or > N
//   N:     alert if value < N
//   :N     alert if value < 0 or > N
//   ~:N    alert if value > N
//   N:M    alert if value outside [N, M]
//   @...   alert if value inside the range instead
//
// A trailing '%' is accepted on either bound and ignored.

/// Failure to parse a warning or critical expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("range unparseable: '{expr}': {reason}")]
    RangeUnparseable { expr: String, reason: &'static str },
}

/// Whether a value falls in the alerting region of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMatch {
    Inside,
    Outside,
}

/// A parsed range. Bounds are inclusive; infinite bounds are `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    start: f64,
    end: f64,
    alert_inside: bool,
}

impl Range {
    pub fn parse(expr: &str) -> Result<Self, ThresholdError> {
        let err = |reason| ThresholdError::RangeUnparseable {
            expr: expr.to_string(),
            reason,
        };

        let mut s = expr.trim();
        if s.is_empty() {
            return Err(err("empty expression"));
        }
        let alert_inside = match s.strip_prefix('@') {
            Some(rest) => {
                s = rest;
                true
            }
            None => false,
        };

        let (start, end) = match s.split_once(':') {
            None => (0.0, parse_bound(s).ok_or_else(|| err("not a number"))?),
            Some((lo, hi)) => {
                let start = match lo.trim() {
                    "" => 0.0,
                    "~" => f64::NEG_INFINITY,
                    lo => parse_bound(lo).ok_or_else(|| err("start is not a number"))?,
                };
                let end = match hi.trim() {
                    "" => f64::INFINITY,
                    hi => parse_bound(hi).ok_or_else(|| err("end is not a number"))?,
                };
                (start, end)
            }
        };
        if start > end {
            return Err(err("start is greater than end"));
        }

        Ok(Self {
            start,
            end,
            alert_inside,
        })
    }

    pub fn classify(&self, value: f64) -> RangeMatch {
        let within = value >= self.start && value <= self.end;
        if within == self.alert_inside {
            RangeMatch::Inside
        } else {
            RangeMatch::Outside
        }
    }
}

fn parse_bound(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s.strip_suffix('%').unwrap_or(s).trim_end();
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Warning and critical ranges. An absent range never alerts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Threshold {
    pub warning: Option<Range>,
    pub critical: Option<Range>,
}

impl Threshold {
    pub fn parse(warning: Option<&str>, critical: Option<&str>) -> Result<Self, ThresholdError> {
        Ok(Self {
            warning: warning.map(Range::parse).transpose()?,
            critical: critical.map(Range::parse).transpose()?,
        })
    }

    pub fn warning_match(&self, value: f64) -> RangeMatch {
        Self::match_optional(self.warning.as_ref(), value)
    }

    pub fn critical_match(&self, value: f64) -> RangeMatch {
        Self::match_optional(self.critical.as_ref(), value)
    }

    fn match_optional(range: Option<&Range>, value: f64) -> RangeMatch {
        range.map_or(RangeMatch::Outside, |r| r.classify(value))
    }
}
