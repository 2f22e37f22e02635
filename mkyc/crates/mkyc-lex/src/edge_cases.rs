//! Edge case tests for mkyc-lex
