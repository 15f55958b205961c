mod repl {
    use postfix::RpnSolver;

    pub fn evalexpr(input: &str) {
        match RpnSolver::new().solve(input) {
            Err(e) => println!("{}", e),
            Ok(result) => println!("{}", result),
        };
    }
}

fn main() {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input[..]);
    } else {
        use postfix::RpnSolver;
        let solver = RpnSolver::new();
        let histpath = dirs::home_dir().map(|h| h.join(".rpn_history")).unwrap();
        let mut rl = rustyline::Editor::<()>::new();
        if rl.load_history(&histpath).is_err() {
            println!("No history yet");
        }
        println!("RPN calculator: enter q to quit");
        while let Ok(input) = rl.readline(">> ") {
            rl.add_history_entry(input.as_str());
            let line = input.trim();
            if line == "q" || line == "Q" {
                break;
            }
            if line.is_empty() {
                continue;
            }
            match solver.solve(line) {
                Err(e) => println!("{}", e),
                Ok(result) => println!("{}", result),
            }
        }
        rl.save_history(&histpath).unwrap();
    }
}
