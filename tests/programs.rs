use std::collections::VecDeque;

use gill::{Error, Fish, NoInput, Options};

fn options() -> Options {
    Options { compatibility: false, seed: Some(42) }
}

/// Runs `src` to completion and returns its output and final stack.
fn run(src: &str, initial: &[f64]) -> (String, Vec<f64>) {
    let mut fish = Fish::load(src, initial.to_vec(), options()).unwrap();
    let mut out = Vec::new();
    let (_, halted) = fish.run_bounded(&mut NoInput, &mut out, 100_000).unwrap();
    assert!(halted, "program did not halt: {src:?}");
    (String::from_utf8(out).unwrap(), fish.stack().values().to_vec())
}

fn fault(src: &str, initial: &[f64]) -> Error {
    let mut fish = Fish::load(src, initial.to_vec(), options()).unwrap();
    fish.run_bounded(&mut NoInput, &mut Vec::new(), 100_000).unwrap_err()
}

#[test]
fn hello_world() {
    let src = r#""hello, world"r\
          o;!?l<"#;
    let (out, stack) = run(src, &[]);
    assert_eq!(out, "hello, world");
    assert!(stack.is_empty());
}

#[test]
fn counts_down() {
    // Prints 5 4 3 2 1 then stops on the zero.
    let (out, stack) = run("5>:?!;:n\" \"o1-!", &[]);
    assert_eq!(out, "5 4 3 2 1 ");
    assert_eq!(stack, vec![0.0]);
}

#[test]
fn arithmetic_examples() {
    assert_eq!(run("52-;", &[]).1, vec![3.0]);
    assert_eq!(run("82,;", &[]).1, vec![4.0]);
    assert_eq!(run("a3%;", &[]).1, vec![1.0]);
    assert_eq!(run("34*n;", &[]).0, "12");
    assert_eq!(run("12,n;", &[]).0, "0.5");
}

#[test]
fn stack_reordering_examples() {
    assert_eq!(run("@;", &[1.0, 2.0, 3.0, 4.0]).1, vec![1.0, 3.0, 4.0, 2.0]);
    assert_eq!(run("};", &[1.0, 2.0, 3.0, 4.0]).1, vec![4.0, 1.0, 2.0, 3.0]);
    assert_eq!(run("{;", &[1.0, 2.0, 3.0, 4.0]).1, vec![2.0, 3.0, 4.0, 1.0]);
    assert_eq!(run("&&;", &[5.0]).1, vec![5.0]);
    assert_eq!(run("$;", &[1.0, 2.0]).1, vec![2.0, 1.0]);
    assert_eq!(run("r;", &[1.0, 2.0, 3.0]).1, vec![3.0, 2.0, 1.0]);
    assert_eq!(run(":l;", &[7.0]).1, vec![7.0, 7.0, 2.0]);
}

#[test]
fn register_belongs_to_its_stack() {
    // 9 is parked in the bottom register; 4 disappears into the child's.
    let (_, stack) = run("&1[&]&;", &[4.0, 9.0]);
    assert_eq!(stack, vec![9.0]);
}

#[test]
fn split_and_close() {
    assert_eq!(run("2[];", &[1.0, 2.0, 3.0, 4.0, 5.0]).1, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(run("2[l];", &[1.0, 2.0, 3.0, 4.0, 5.0]).1, vec![1.0, 2.0, 3.0, 4.0, 5.0, 2.0]);

    let mut fish = Fish::load("2[n];", vec![1.0, 2.0, 3.0], Options { compatibility: true, seed: None }).unwrap();
    let mut out = Vec::new();
    fish.run(&mut NoInput, &mut out).unwrap();
    assert_eq!(out, b"2");
    assert_eq!(fish.stack().values(), &[1.0, 3.0]);
}

#[test]
fn self_modifying_arrow() {
    // Writes 'v' over the `;` before the fish reaches it, sending it down
    // to the row that prints 1.
    let src = "'v'90p   ;\n         >1n;";
    let (out, _) = run(src, &[]);
    assert_eq!(out, "1");
}

#[test]
fn mirrors_route_the_fish() {
    let src = "\\\n1\nn\n;";
    assert_eq!(run(src, &[]).0, "1");
    let src = "v\n>2n;";
    assert_eq!(run(src, &[]).0, "2");
    assert_eq!(run("#;n3", &[]).0, "3");
}

#[test]
fn get_reads_the_grid() {
    let (_, stack) = run("10g;", &[]);
    assert_eq!(stack, vec![b'0' as f64]);
}

#[test]
fn input_bytes_then_minus_one() {
    let mut fish = Fish::load("iii;", vec![], options()).unwrap();
    let mut input: VecDeque<u8> = VecDeque::from(b"ok".to_vec());
    fish.run(&mut input, &mut Vec::new()).unwrap();
    assert_eq!(fish.stack().values(), &[b'o' as f64, b'k' as f64, -1.0]);
}

#[test]
fn random_direction_still_reaches_the_exit() {
    // Up and down lead back into the `x`; left and right reach the `;`.
    let mut fish = Fish::load(">v\n x;\n", vec![], options()).unwrap();
    let (_, halted) = fish.run_bounded(&mut NoInput, &mut Vec::new(), 10_000).unwrap();
    assert!(halted);
}

#[test]
fn faults_are_fatal_and_typed() {
    assert!(matches!(fault("~", &[]), Error::EmptyStack { .. }));
    assert!(matches!(fault("]", &[]), Error::NoParentStack));
    assert!(matches!(fault("  Q", &[]), Error::InvalidInstruction { byte: b'Q', x: 2, y: 0 }));
    assert!(matches!(fault("99g", &[]), Error::OutOfBounds { .. }));
    assert!(matches!(fault("99.", &[]), Error::OutOfBounds { x, y } if x == 9.0 && y == 9.0));
    assert!(matches!(fault("199p", &[]), Error::OutOfBounds { .. }));
    assert!(matches!(fault("10%", &[]), Error::DivisionByZero));
}

#[test]
fn nothing_runs_after_a_fault() {
    let mut fish = Fish::load("1~~2;", vec![], options()).unwrap();
    let mut out = Vec::new();
    assert!(fish.run(&mut NoInput, &mut out).is_err());
    assert!(fish.stack().is_empty());
    assert_eq!(fish.position(), (2, 0));
}

#[test]
fn empty_program_is_rejected_at_load() {
    let err = Fish::load(" \n\r\n", vec![], options()).unwrap_err();
    assert!(matches!(err, Error::EmptyProgram));
    assert!(!err.is_runtime());
}

#[test]
fn trailing_newline_leaves_a_writable_row() {
    let mut fish = Fish::load("a01p;\n", vec![], options()).unwrap();
    assert_eq!(fish.grid().height(), 2);
    fish.run(&mut NoInput, &mut Vec::new()).unwrap();
    assert_eq!(fish.grid().get(0, 1), 10);
    assert!(fish.stack().is_empty());
}

#[test]
fn trampoline_skips_across_the_edge() {
    let mut fish = Fish::load("r  !", vec![], options()).unwrap();
    let (cycles, halted) = fish.run_bounded(&mut NoInput, &mut Vec::new(), 4).unwrap();
    assert_eq!((cycles, halted), (4, false));
    assert_eq!(fish.position(), (1, 0));
}

#[test]
fn single_quoted_strings_push_double_quotes() {
    let (out, stack) = run("'a\"'n;", &[]);
    assert_eq!(out, "34");
    assert_eq!(stack, vec![b'a' as f64]);
}
