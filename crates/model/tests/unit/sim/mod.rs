//! Run-loop tests: image parsing, halting, and lockstep verification.
