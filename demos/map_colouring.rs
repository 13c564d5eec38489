use crossfill::{
    examples::map_colouring::{build_problem, Colour},
    solver::engine::SolverEngine,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let regions = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
    let borders = [
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 5),
    ];
    let palette = [Colour::Red, Colour::Green, Colour::Blue];

    let (graph, domains) = build_problem(&regions, &borders, &palette)?;
    let (solution, stats) = SolverEngine::default().solve(&graph, domains);

    match solution {
        Some(solution) => {
            for id in graph.variables() {
                let colour = solution.get(&id).expect("complete assignment");
                println!("{:>4}: {colour:?}", graph.tag(id));
            }
        }
        None => println!("No colouring exists."),
    }
    println!(
        "({} nodes, {} backtracks)",
        stats.nodes_visited, stats.backtracks
    );
    Ok(())
}
