use epiclust::{KMeans, PCA, refine_cluster, parse_csv, report};

// Excerpt of a WHO-style tuberculosis incidence table: one row per country,
// one column per year, absolute case counts with thousands separators.
const TB_CSV: &str = "\
country,X1990,X1991,X1992,X1993,X1994,X1995
Afghanistan,\"50,443\",\"51,316\",\"55,336\",\"58,820\",\"61,121\",\"63,598\"
Bangladesh,\"263,598\",\"262,336\",\"260,226\",\"258,311\",\"256,825\",\"255,437\"
Brazil,\"110,513\",\"109,310\",\"107,108\",\"104,804\",\"102,257\",\"99,622\"
Cambodia,\"72,163\",\"74,393\",\"76,717\",\"79,115\",\"81,516\",\"83,848\"
China,\"1,348,130\",\"1,361,290\",\"1,372,530\",\"1,381,860\",\"1,388,940\",\"1,393,330\"
Germany,\"17,913\",\"17,522\",\"17,620\",\"17,415\",\"16,977\",\"16,284\"
Iceland,11,11,10,10,9,9
India,\"1,790,769\",\"1,818,136\",\"1,843,941\",\"1,867,970\",\"1,889,966\",\"1,909,892\"
Indonesia,\"443,364\",\"450,789\",\"458,263\",\"465,779\",\"473,326\",\"480,910\"
Netherlands,\"1,646\",\"1,636\",\"1,631\",\"1,630\",\"1,626\",\"1,615\"
Norway,359,356,349,342,334,325
Peru,\"53,740\",\"53,421\",\"52,944\",\"52,320\",\"51,565\",\"50,699\"
Philippines,\"197,593\",\"201,239\",\"204,848\",\"208,406\",\"211,911\",\"215,353\"
Vietnam,\"123,556\",\"125,901\",\"128,215\",\"130,499\",\"132,748\",\"134,957\"
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== TB incidence: PCA + k-means walkthrough ===\n");

    let data = parse_csv(TB_CSV)?;
    println!(
        "Dataset: {} countries, {} yearly columns ({} .. {})",
        data.n_rows(),
        data.n_cols(),
        data.columns.first().unwrap(),
        data.columns.last().unwrap()
    );

    println!("\n=== Principal components (standardized) ===");
    let mut pca = PCA::new().n_components(2);
    let scores = pca.fit_transform(&data.values)?;

    let explained = pca.explained_variance_ratio.as_ref().unwrap();
    println!(
        "PC1 explains {:.1}% of variance, PC2 explains {:.1}%",
        explained[0] * 100.0,
        explained[1] * 100.0
    );

    println!("\nComponent scores (for the scatterplot):");
    for (label, coords) in report::scores_table(&data, &scores)? {
        println!("  {:<14} PC1 {:>8.3}  PC2 {:>8.3}", label, coords[0], coords[1]);
    }

    println!("\n=== Trying k = 3..6 on the original (unscaled) table ===");
    for k in 3..=6 {
        let fit = KMeans::new(k).seed(2021).fit(&data.values)?;
        println!(
            "k = {}: sizes {:?}, total WCSS {:.3e}, {} iterations{}",
            k,
            fit.sizes,
            fit.total_wcss,
            fit.n_iter,
            if fit.converged { "" } else { " (iteration cap hit)" }
        );
    }

    println!("\n=== Settling on k = 4 ===");
    let fit = KMeans::new(4).seed(2021).fit(&data.values)?;
    let groups = report::membership(&data, &fit)?;
    for (cluster, members) in groups.iter().enumerate() {
        println!("Cluster {}: {}", cluster + 1, members.join(", "));
    }

    // Take the most populated cluster and look for sub-groups inside it.
    let (largest, _) = fit
        .sizes
        .iter()
        .enumerate()
        .max_by_key(|&(_, &size)| size)
        .unwrap();
    let largest_id = largest + 1;

    println!(
        "\n=== Second level: splitting cluster {} (size {}) with k = 2 ===",
        largest_id, fit.sizes[largest]
    );
    let refinement = refine_cluster(&data, &fit, largest_id, &KMeans::new(2).seed(2022))?;
    let sub_groups = report::membership(&refinement.subset, &refinement.fit)?;
    for (cluster, members) in sub_groups.iter().enumerate() {
        println!("Sub-cluster {}: {}", cluster + 1, members.join(", "));
    }

    println!("\nSub-cluster centroid trajectories (for the line chart):");
    for (cluster, series) in report::centroid_table(&refinement.subset, &refinement.fit)? {
        let trajectory: Vec<String> = series
            .iter()
            .map(|(year, value)| format!("{}={:.0}", year, value))
            .collect();
        println!("  Sub-cluster {}: {}", cluster, trajectory.join("  "));
    }

    Ok(())
}
