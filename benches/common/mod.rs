/// Generate a workflow with `jobs` jobs of `steps` steps each
///
/// Every `violation_every`-th name lacks an emoji; 0 keeps all names valid.
pub fn generate_workflow(jobs: usize, steps: usize, violation_every: usize) -> String {
    let mut counter = 0;
    let mut name = |label: String| {
        counter += 1;
        if violation_every != 0 && counter % violation_every == 0 {
            label
        } else {
            format!("🚀 {label}")
        }
    };

    let mut content = format!("name: {}\non: push\njobs:\n", name("Pipeline".to_string()));
    for j in 0..jobs {
        content.push_str(&format!("  job_{j}:\n"));
        content.push_str(&format!("    name: {}\n", name(format!("Job {j}"))));
        content.push_str("    runs-on: ubuntu-latest\n    steps:\n");
        for s in 0..steps {
            content.push_str(&format!("      - name: {}\n", name(format!("Step {j}.{s}"))));
            content.push_str(&format!("        run: echo {j} {s}\n"));
        }
    }
    content
}
