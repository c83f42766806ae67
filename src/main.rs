use creature_adventure::battle::session::{Action, BattleSession, SessionOutcome};
use creature_adventure::battle::state::{BattleRng, EventBus};
use creature_adventure::combatant::Combatant;
use creature_adventure::errors::ActionError;
use creature_adventure::prefab;
use creature_adventure::roster::Roster;
use std::io::{self, BufRead, Write};

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to the Creature World!");
    println!("Choose your starter:");

    let starters = prefab::starter_choices();
    for (i, starter) in starters.iter().enumerate() {
        println!("{}. {}", i + 1, starter.name);
    }

    let choice = prompt_index(&mut input, "Enter the number of your choice: ", starters.len());
    let starter = starters.into_iter().nth(choice).expect("index was validated");

    println!("\nYou chose {}!", starter.name);
    print_stats(&starter);

    let mut roster = Roster::new();
    roster.add(starter);

    loop {
        println!("\nWhat would you like to do?");
        println!("1. Find a wild creature");
        println!("2. View your creatures");
        println!("3. Exit game");

        match prompt_line(&mut input, "> ").as_str() {
            "1" => {
                if !run_encounter(&mut input, &mut roster) {
                    break;
                }
            }
            "2" => view_roster(&roster),
            "3" => {
                println!("Thanks for playing!");
                break;
            }
            _ => println!("Invalid action. Try again."),
        }
    }
}

/// Run one wild encounter. Returns false when the whole roster is down and
/// the game is over.
fn run_encounter(input: &mut impl BufRead, roster: &mut Roster) -> bool {
    let wild = prefab::spawn_wild(&mut rand::rng());

    let player = match roster.require_active_mut() {
        Ok(player) => player,
        Err(_) => {
            println!("All your creatures have fainted! You should rest.");
            return true;
        }
    };
    println!("\nYour active creature is {}.", player.name);

    let mut rng = BattleRng::new_random();
    let mut events = EventBus::new();
    let mut session = BattleSession::new(player, wild, &mut events);
    events.print_formatted();
    print_stats(session.wild());

    while !session.is_over() {
        print_stats(session.player());
        println!("\nWhat will you do?");
        println!("1. Fight");
        println!("2. Catch");
        println!("3. Run");

        let action = match prompt_line(input, "> ").as_str() {
            "1" => {
                println!("\nChoose a move:");
                for (i, move_) in session.player().moves().iter().enumerate() {
                    println!("  {}. {}", i + 1, move_.name());
                }
                let move_count = session.player().moves().len();
                Action::Fight {
                    move_index: prompt_index(input, "> ", move_count),
                }
            }
            "2" => Action::Capture,
            "3" => Action::Flee,
            _ => {
                println!("Invalid action. Try again.");
                continue;
            }
        };

        let mut events = EventBus::new();
        match session.submit_action(action, &mut rng, &mut events) {
            Ok(_) => events.print_formatted(),
            // Rejected actions consume no turn; just re-prompt.
            Err(ActionError::InvalidMoveIndex(_)) => println!("Invalid move choice. Try again."),
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    match session.into_outcome() {
        Some(SessionOutcome::DefenderCaptured(captured)) => {
            println!("\n{} was added to your collection!", captured.name);
            roster.add(captured);
            println!("You now have {} creature(s).", roster.len());
        }
        Some(SessionOutcome::DefenderDefeated) => println!("You won the battle!"),
        Some(SessionOutcome::PlayerLost) => {
            if roster.all_incapacitated() {
                println!("\nAll your creatures have fainted! Game Over.");
                return false;
            }
            println!("Returning to the main menu...");
        }
        Some(SessionOutcome::Fled) | None => {}
    }
    true
}

fn view_roster(roster: &Roster) {
    println!("\nYour collection:");
    for (i, member) in roster.iter().enumerate() {
        println!("--- Creature {} ---", i + 1);
        print_stats(member);
        if member.is_incapacitated() {
            println!("(Fainted)");
        }
    }
}

fn print_stats(combatant: &Combatant) {
    println!("\n{} ({})", combatant.name, combatant.category);
    println!("HP: {}/{}", combatant.current_health(), combatant.max_health());
    println!("Attack: {}", combatant.attack());
    println!("Defense: {}", combatant.defense());
    println!("Speed: {}", combatant.speed());
    println!("Moves:");
    for (i, move_) in combatant.moves().iter().enumerate() {
        println!(
            "  {}. {} (Power: {}, Acc: {})",
            i + 1,
            move_.name(),
            move_.power(),
            move_.accuracy()
        );
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        // End of input: there is nothing left to prompt for.
        Ok(0) | Err(_) => {
            println!("\nThanks for playing!");
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}

/// Re-prompt until the user enters a number in 1..=count; returns it 0-based.
fn prompt_index(input: &mut impl BufRead, prompt: &str, count: usize) -> usize {
    loop {
        match prompt_line(input, prompt).parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return choice - 1,
            _ => println!("Invalid choice. Please select a valid number."),
        }
    }
}
