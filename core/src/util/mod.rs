pub mod contains_ignore_case;
