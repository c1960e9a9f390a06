use crate::gradebook::GradeBook;
use crate::model::Grade;
use crate::roster::Roster;

pub fn display_age_range(roster: &Roster, min: u32, max: u32) {
    let students = roster.by_age(min, max);
    println!("Students aged {min}-{max}:");
    if students.is_empty() {
        println!("  (none)");
    }
    for student in students {
        println!("  - {student}");
    }
    println!();
}

pub fn display_report(roster: &Roster, book: &GradeBook) {
    for student in roster.all() {
        println!("{} ({})", student.name(), student.id());
        let scores = book.scores_for(student.id());
        if scores.is_empty() {
            println!("  no recorded scores");
            println!();
            continue;
        }
        for score in &scores {
            println!("  - {score}");
        }
        let average = book.average(student.id());
        println!(
            "  average {:.2}, grade {}",
            average,
            Grade::from_average(average)
        );
        println!();
    }
}

pub fn display_top(roster: &Roster, book: &GradeBook, count: usize) {
    let ranked = book.top_students(count);
    if ranked.is_empty() {
        println!("No student has recorded scores yet.");
        return;
    }
    println!("Top students by average:");
    for (rank, (id, average)) in ranked.iter().enumerate() {
        match roster.get(id) {
            Some(student) => {
                println!("  {}. {} ({id}) - {average:.2}", rank + 1, student.name());
            }
            None => println!("  {}. {id} - {average:.2}", rank + 1),
        }
    }
    println!();
}

/// Score entries recorded under identifiers with no roster record. These
/// are legal; listing them makes the gap visible.
pub fn display_orphans(roster: &Roster, book: &GradeBook) {
    let orphans = book
        .student_ids()
        .into_iter()
        .filter(|id| roster.get(id).is_none())
        .collect::<Vec<_>>();
    if !orphans.is_empty() {
        println!("Scores without a matching student record:");
        for id in orphans {
            println!("  - {id}");
        }
        println!();
    }
}
