// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::common::Error;
    use crate::log::{LogRecord, Severity, StringLogger};

    #[test]
    fn logger_tests() {
        println!("Testing logger");
        let log1 = StringLogger::default();
        assert!(log1.is_empty());

        let bar = 123;
        log1.trace(format!("foo {bar}"));
        log1.info(format!("bar {bar}"));
        log1.trace(String::new());
        println!("Testing trace:\n{log1}");
        assert_eq!(log1.len(), 2);
        assert_eq!(log1.to_string(), "TRACE: foo 123\nINFO: bar 123");
        assert!(!log1.contains_warnings());

        let log1b = log1.clone();
        log1b.trace("shared".to_string());
        assert_eq!(log1.len(), 3);

        let log2 = StringLogger::default();
        log2.warn("this is a warning".to_string());
        log2.warn(String::new());
        assert!(log2.contains_warnings());
        assert_eq!(log2.len(), 1);
        assert_eq!(
            log2.records()[0],
            LogRecord {
                severity: Severity::Warn,
                line: "this is a warning".to_string()
            }
        );
    }

    #[test]
    fn logger_empty_line_tests() {
        let logger = StringLogger::default();
        logger.log(Severity::Info, String::new());
        logger.log(Severity::Info, "b.fr".to_string());
        assert_eq!(logger.len(), 2);
        assert_eq!(logger.records_at(Severity::Info)[0].line, "");
        assert!(!logger.contains_warnings());
    }

    #[test]
    fn logger_call_tests() {
        let logger = StringLogger::new(true);
        let ok: Result<u8, Error> = logger.call("step one".to_string(), Ok(1));
        assert!(ok.is_ok());
        assert!(!logger.contains_warnings());
        let err: Result<u8, Error> =
            logger.call("step two".to_string(), Err(Error::String("boom".to_string())));
        assert!(err.is_err());
        assert!(logger.contains_warnings());
        let warnings = logger.records_at(Severity::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].line.starts_with("step two failed"));
    }

    #[test]
    fn logger_exception_tests() {
        let logger = StringLogger::default();
        logger.exception(
            "listing failed".to_string(),
            &Error::String("bad scope".to_string()),
        );
        let records = logger.records_at(Severity::Error);
        assert_eq!(records.len(), 1);
        assert!(records[0].line.contains("listing failed: bad scope"));
        assert!(records[0].line.contains("String(\"bad scope\")"));
        assert!(logger.contains_warnings());
    }

    #[test]
    fn severity_tests() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Warn < Severity::Error);
        assert_eq!(Severity::default(), Severity::Error);
        assert_eq!("INFO".parse::<Severity>().expect("info"), Severity::Info);
        assert_eq!("warning".parse::<Severity>().expect("warn"), Severity::Warn);
        assert!("loud".parse::<Severity>().is_err());
        assert_eq!(Severity::Debug.to_string(), "DEBUG");

        let json = serde_json::to_string(&Severity::Info).expect("serialize");
        assert_eq!(json, "\"INFO\"");
        let back: Severity = serde_json::from_str("\"trace\"").expect("deserialize");
        assert_eq!(back, Severity::Trace);
    }
}
