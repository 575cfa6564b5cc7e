//! # kif
//!
//! A compiler from SUO-KIF, the S-expression notation used by SUMO-style ontologies, to
//! TPTP, the input language of automated theorem provers.
//!
//! File Layout
//!
//! The pipeline mirrors the module tree, leaves first:
//!
//! src/kif
//!   ├── token          Core logos tokens and the positioned Token
//!   ├── lexing         Source text to tokens, collecting lexical errors
//!   ├── parsing        Tokens to an ordered list of nodes, recovering from bad parens
//!   ├── ast            The closed Node union and source ranges
//!   ├── formula        Read-only queries over nodes (head, arguments, variables)
//!   ├── translation    One formula to one TPTP formula string
//!   ├── conversion     A whole knowledge base to a named, deduplicated axiom document
//!   ├── formats        AST serializers (kif, treeviz, json)
//!   ├── config         Layered configuration loading
//!   └── testing        Node factories and TPTP assertions for tests
//!
//! The core is pure: nothing in `kif::kif` touches the file system or keeps state between
//! calls. Reading files and running provers is the caller's business (see `src/bin/kif.rs`).

pub mod kif;
