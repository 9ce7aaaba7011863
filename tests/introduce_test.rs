use person_intro::Person;
use std::process::Command;

#[test]
fn test_construct_and_read_back() {
    let bob = Person::new("Bob", 30, 6.1, false);

    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.age, 30);
    assert_eq!(bob.height, 6.1);
    assert!(!bob.is_student);
}

#[test]
fn test_introductions_in_driver_order() {
    let people = [
        Person::new("Alice", 25, 5.9, true),
        Person::new("Bob", 30, 6.1, false),
    ];

    let lines: Vec<String> = people.iter().map(Person::introduction).collect();

    assert_eq!(
        lines,
        vec![
            "Alice is 25 years old, 5.9 feet tall, and is a student: true",
            "Bob is 30 years old, 6.1 feet tall, and is a student: false",
        ]
    );
}

#[test]
fn test_cli_prints_exactly_two_lines_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_person-intro"))
        .output()
        .expect("failed to run person-intro binary");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Alice is 25 years old, 5.9 feet tall, and is a student: true",
            "Bob is 30 years old, 6.1 feet tall, and is a student: false",
        ]
    );
}
