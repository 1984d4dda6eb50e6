//! Common source code fixtures for tests.

/// Authority block: facts, a rule and a check
pub const AUTHORITY_BLOCK: &str = r#"// this is a fact, the basic data used in Datalog
// facts with #authority can only be in the first block
right(#authority, "/folder1/file1", #read)
right(#authority, "/folder1/file1", #write)
right(#authority, "/folder2/file1", #read)

// rules generate more facts from existing ones
can_read($file) <- right(#authority, $file, #read)

// this is a check
check if operation(#ambient, #read)
"#;

/// Attenuation block: a multi-line check with an expression
pub const RESTRICTION_BLOCK: &str = r#"// to restrict rights, we add blocks with more checks
check if
  resource(#ambient, $file),
  $file.starts_with("/folder1/")
"#;

/// Verifier: ambient facts and policies
pub const VERIFIER_BLOCK: &str = r#"// here we got a read request on /folder1/file1
resource(#ambient, "/folder1/file1")
operation(#ambient, #read)

/* if this matches,
   the verification will succeed */
allow if
  resource(#ambient, $file),
  operation(#ambient, $op),
  right(#authority, $file, $op)

// this catch-all policy will refuse the request
deny if true
"#;

/// Mid-keystroke and malformed inputs
pub const BROKEN_INPUTS: &[&str] = &[
    "",
    "(",
    ")))",
    "\"unterminated",
    "\"trailing backslash\\",
    "/* never closed",
    "right(#authority, \"/f",
    "$",
    "#",
    "@@@ ~~~ ^^^",
    "2023-13-45T99:99:99Z",
    "check if\r\n  op(\r\n",
    "é😀 ümlaut(😀, \"ü\")",
];
