mod error;
mod report;
mod scenario;

use clap::{Parser, Subcommand, ValueEnum};
use error::AppResult;
use ev_analysis::{
    FeedCostPoint, SweepAxis, SweepVariable, annual_operating_cost_eur, crystallizer_cost_eur,
    evaporator_cost_eur, optimize_feed_flow, roi_years, run_sensitivity,
    total_capital_investment_eur,
};
use ev_core::units::kg;
use ev_crystal::{CoolingSchedule, evaluate_batch, size_vessel};
use ev_properties::SucroseModel;
use ev_train::{EqualSplit, effect_count_study, size_train, solve_train, train_performance};
use report::{
    BatchStateRow, CrystallizeReport, EffectCountReport, EffectCountRow, EffectRow, OptimizeReport,
    OptimizeRow, SimulateReport, SweepReport, SweepRow,
};
use scenario::Scenario;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ev-cli")]
#[command(about = "EvapFlow CLI - Evaporation and crystallization design tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve, size, and rate the evaporation train
    Simulate {
        /// Path to a scenario YAML file (defaults to the reference case)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Emit a JSON report instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Run the batch cooling crystallization
    Crystallize {
        /// Path to a scenario YAML file (defaults to the reference case)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Emit a JSON report instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Sweep one train variable over a linear axis
    Sweep {
        /// Variable to perturb
        #[arg(long, value_enum)]
        variable: SweepVarArg,
        /// Axis start
        #[arg(long)]
        from: f64,
        /// Axis end
        #[arg(long)]
        to: f64,
        /// Number of axis points
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Path to a scenario YAML file (defaults to the reference case)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Emit a JSON report instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Tabulate economy, surface, and steam against effect count
    Effects {
        /// Largest effect count to tabulate
        #[arg(long, default_value_t = 6)]
        max_effects: usize,
        /// Path to a scenario YAML file (defaults to the reference case)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Emit a JSON report instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Find the cheapest feed flow on a linear axis
    Optimize {
        /// Axis start [kg/h]
        #[arg(long, default_value_t = 16_000.0)]
        from: f64,
        /// Axis end [kg/h]
        #[arg(long, default_value_t = 24_000.0)]
        to: f64,
        /// Number of axis points
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Path to a scenario YAML file (defaults to the reference case)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Emit a JSON report instead of tables
        #[arg(long)]
        json: bool,
    },
}

/// CLI spelling of the sweep variable.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SweepVarArg {
    /// First-effect operating pressure [bar]
    Pressure,
    /// Final concentration target [mass fraction]
    Target,
    /// Feed mass flow [kg/h]
    FeedFlow,
    /// Feed temperature [degC]
    FeedTemp,
}

impl From<SweepVarArg> for SweepVariable {
    fn from(arg: SweepVarArg) -> Self {
        match arg {
            SweepVarArg::Pressure => SweepVariable::FirstEffectPressureBar,
            SweepVarArg::Target => SweepVariable::TargetConcentration,
            SweepVarArg::FeedFlow => SweepVariable::FeedFlowKgPerHour,
            SweepVarArg::FeedTemp => SweepVariable::FeedTemperatureC,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { scenario, json } => cmd_simulate(scenario.as_deref(), json),
        Commands::Crystallize { scenario, json } => cmd_crystallize(scenario.as_deref(), json),
        Commands::Sweep {
            variable,
            from,
            to,
            points,
            scenario,
            json,
        } => cmd_sweep(variable, from, to, points, scenario.as_deref(), json),
        Commands::Effects {
            max_effects,
            scenario,
            json,
        } => cmd_effects(max_effects, scenario.as_deref(), json),
        Commands::Optimize {
            from,
            to,
            points,
            scenario,
            json,
        } => cmd_optimize(from, to, points, scenario.as_deref(), json),
    }
}

fn cmd_simulate(scenario_path: Option<&Path>, json: bool) -> AppResult<()> {
    let scenario = Scenario::load_or_default(scenario_path)?;
    let model = SucroseModel::new();
    let train = &scenario.train;

    let feed = train.feed()?;
    let pressures = train.pressures()?;
    let solution = solve_train(
        &model,
        &feed,
        train.target_concentration,
        &pressures,
        &EqualSplit,
    )?;
    let sizing = size_train(
        &solution,
        train.steam_temperature_c,
        &train.film_coefficients_w_m2k,
        train.fouling_resistance_m2k_w,
    )?;
    let perf = train_performance(&solution);

    let areas = sizing.areas_m2();
    let effects = solution
        .effects
        .iter()
        .enumerate()
        .map(|(i, e)| EffectRow {
            effect: e.index + 1,
            liquid_flow_kg_h: e.liquid_flow,
            vapor_flow_kg_h: e.vapor_flow,
            concentration: e.concentration,
            temperature_c: e.temperature_c(),
            heat_duty_kw: e.heat_duty_w() / 1.0e3,
            driving_force_k: sizing.driving_forces_k[i],
            area_m2: areas[i],
        })
        .collect();

    let invest = evaporator_cost_eur(sizing.total_area().value)?;
    let capital = total_capital_investment_eur(&[invest])?;
    let opex = annual_operating_cost_eur(
        perf.steam_consumption_kg_h,
        scenario.economics.electric_load_kw,
    )?;
    let payback = roi_years(capital, scenario.economics.annual_profit_eur)?;

    let report = SimulateReport {
        effects,
        total_vapor_kg_h: solution.total_vapor,
        product_flow_kg_h: solution.final_liquid,
        final_concentration: solution.final_concentration(),
        total_area_m2: sizing.total_area().value,
        pinched_effects: sizing.pinched_effects().to_vec(),
        steam_consumption_kg_h: perf.steam_consumption_kg_h,
        steam_economy: perf.steam_economy,
        evaporator_cost_eur: invest,
        total_capital_eur: capital,
        annual_operating_cost_eur: opex,
        payback_years: payback,
    };

    if json {
        return print_json(&report);
    }

    println!(
        "Forward-feed evaporation train: {} effects",
        report.effects.len()
    );
    println!(
        "  Feed: {:.0} kg/h at {:.1} % solids, {:.1} degC",
        train.feed_flow_kg_h,
        100.0 * train.feed_concentration,
        train.feed_temperature_c
    );
    println!("  Target: {:.1} % solids", 100.0 * train.target_concentration);
    println!();
    println!("Effect    L [kg/h]    V [kg/h]     x [-]   T [degC]     Q [kW]    dT [K]    A [m2]");
    for row in &report.effects {
        println!(
            "{:>6} {:>11.1} {:>11.1} {:>9.4} {:>10.2} {:>10.1} {:>9.2} {:>9.1}",
            row.effect,
            row.liquid_flow_kg_h,
            row.vapor_flow_kg_h,
            row.concentration,
            row.temperature_c,
            row.heat_duty_kw,
            row.driving_force_k,
            row.area_m2
        );
    }
    if !report.pinched_effects.is_empty() {
        let names: Vec<String> = report
            .pinched_effects
            .iter()
            .map(|i| (i + 1).to_string())
            .collect();
        println!();
        println!(
            "! No usable driving force in effect(s) {}: raise the steam temperature or drop the effect pressure",
            names.join(", ")
        );
    }
    println!();
    println!("Totals:");
    println!("  Vapor:    {:>10.1} kg/h", report.total_vapor_kg_h);
    println!(
        "  Product:  {:>10.1} kg/h at {:.1} % solids",
        report.product_flow_kg_h,
        100.0 * report.final_concentration
    );
    println!("  Surface:  {:>10.1} m2", report.total_area_m2);
    println!("  Steam:    {:>10.1} kg/h", report.steam_consumption_kg_h);
    println!("  Economy:  {:>10.3}", report.steam_economy);
    println!();
    println!("Economics:");
    println!(
        "  Evaporator investment: {:>12.0} EUR",
        report.evaporator_cost_eur
    );
    println!("  Total capital:         {:>12.0} EUR", report.total_capital_eur);
    println!(
        "  Operating cost:        {:>12.0} EUR/a",
        report.annual_operating_cost_eur
    );
    println!("  Payback:               {:>12.1} a", report.payback_years);

    Ok(())
}

fn cmd_crystallize(scenario_path: Option<&Path>, json: bool) -> AppResult<()> {
    let scenario = Scenario::load_or_default(scenario_path)?;
    let model = SucroseModel::new();
    let batch = &scenario.batch;

    let run = evaluate_batch(
        &batch.cooling,
        batch.horizon_s,
        batch.samples,
        batch.liquor_concentration_g_per_100g,
        batch.magma_concentration_kg_m3,
    )?;
    let vessel = size_vessel(
        &model,
        kg(batch.batch_mass_kg),
        batch.liquor_mass_fraction,
        batch.crystallizer_temperature_c,
    )?;
    let vessel_cost = crystallizer_cost_eur(vessel.volume_m3())?;

    let states = run
        .states
        .iter()
        .map(|s| BatchStateRow {
            time_s: s.time_s,
            temperature_c: s.temperature_c,
            solubility_g_per_100g: s.solubility_g_per_100g,
            supersaturation: s.supersaturation,
            nucleation_rate_per_m3_s: s.nucleation_rate,
            growth_rate_m_per_s: s.growth_rate_m_per_s,
        })
        .collect();

    let report = CrystallizeReport {
        schedule: batch.cooling,
        states,
        final_supersaturation: run.final_supersaturation,
        peak_supersaturation: run.peak_supersaturation(),
        mean_size_um: run.mean_size_m * 1.0e6,
        population_density_per_m4: run.population_density,
        size_cv_pct: run.size_cv_pct,
        vessel_volume_m3: vessel.volume_m3(),
        agitation_power_w: vessel.agitation_power_w(),
        crystallizer_cost_eur: vessel_cost,
    };

    if json {
        return print_json(&report);
    }

    println!("Batch cooling crystallization");
    println!("  Schedule: {}", describe_schedule(&batch.cooling));
    println!(
        "  Liquor: {:.1} g/100 g water, magma {:.1} kg/m3",
        batch.liquor_concentration_g_per_100g, batch.magma_concentration_kg_m3
    );
    println!();
    println!("   t [s]   T [degC]   c* [g/100g]      S [-]    B [#/(m3 s)]      G [m/s]");
    for i in preview_rows(report.states.len()) {
        let s = &report.states[i];
        println!(
            "{:>8.0} {:>10.2} {:>13.2} {:>10.4} {:>15.3e} {:>12.3e}",
            s.time_s,
            s.temperature_c,
            s.solubility_g_per_100g,
            s.supersaturation,
            s.nucleation_rate_per_m3_s,
            s.growth_rate_m_per_s
        );
    }
    println!();
    println!("Batch summary:");
    println!(
        "  Final supersaturation: {:>10.4}",
        report.final_supersaturation
    );
    println!(
        "  Peak supersaturation:  {:>10.4}",
        report.peak_supersaturation
    );
    println!("  Mean crystal size:     {:>10.2} um", report.mean_size_um);
    println!(
        "  Population density:    {:>10.3e} #/m4",
        report.population_density_per_m4
    );
    println!("  Size CV:               {:>10.1} %", report.size_cv_pct);
    println!();
    println!("Vessel:");
    println!("  Volume:          {:>8.2} m3", report.vessel_volume_m3);
    println!("  Agitation power: {:>8.1} W", report.agitation_power_w);
    println!("  Installed cost:  {:>8.0} EUR", report.crystallizer_cost_eur);

    Ok(())
}

fn cmd_sweep(
    variable: SweepVarArg,
    from: f64,
    to: f64,
    points: usize,
    scenario_path: Option<&Path>,
    json: bool,
) -> AppResult<()> {
    let scenario = Scenario::load_or_default(scenario_path)?;
    let model = SucroseModel::new();
    let case = scenario.train.sensitivity_case()?;
    let axis = SweepAxis::new(from, to, points)?;
    let var: SweepVariable = variable.into();

    let sweep = run_sensitivity(&model, &case, var, &axis)?;

    let report = SweepReport {
        variable: var.label().to_string(),
        points: sweep
            .points
            .iter()
            .map(|p| SweepRow {
                value: p.value,
                temperatures_c: p.temperatures_c.clone(),
                total_area_m2: p.total_area_m2,
                steam_consumption_kg_h: p.steam_consumption_kg_h,
                steam_economy: p.steam_economy,
                pinched_effects: p.pinched_effects,
            })
            .collect(),
    };

    if json {
        return print_json(&report);
    }

    println!("Sensitivity sweep: {}", report.variable);
    println!("  {} points from {} to {}", points, from, to);
    println!();
    println!("       Value   T1 [degC]    A [m2]   Steam [kg/h]   Economy   Pinched");
    for row in &report.points {
        let t1 = row.temperatures_c.first().copied().unwrap_or(f64::NAN);
        println!(
            "{:>12.3} {:>11.2} {:>9.1} {:>14.1} {:>9.3} {:>9}",
            row.value,
            t1,
            row.total_area_m2,
            row.steam_consumption_kg_h,
            row.steam_economy,
            row.pinched_effects
        );
    }

    Ok(())
}

fn cmd_effects(max_effects: usize, scenario_path: Option<&Path>, json: bool) -> AppResult<()> {
    let scenario = Scenario::load_or_default(scenario_path)?;
    let rows = effect_count_study(scenario.train.feed_flow_kg_h, max_effects)?;

    let report = EffectCountReport {
        feed_flow_kg_h: scenario.train.feed_flow_kg_h,
        rows: rows
            .iter()
            .map(|r| EffectCountRow {
                effects: r.effects,
                steam_economy: r.steam_economy,
                indicative_surface_m2: r.indicative_surface_m2,
                steam_demand_kg_h: r.steam_demand_kg_h,
            })
            .collect(),
    };

    if json {
        return print_json(&report);
    }

    println!(
        "Effect-count study at {:.0} kg/h feed",
        report.feed_flow_kg_h
    );
    println!();
    println!("   n   Economy   Surface [m2]   Steam [kg/h]");
    for row in &report.rows {
        println!(
            "{:>4} {:>9.2} {:>14.1} {:>14.1}",
            row.effects, row.steam_economy, row.indicative_surface_m2, row.steam_demand_kg_h
        );
    }

    Ok(())
}

fn cmd_optimize(
    from: f64,
    to: f64,
    points: usize,
    scenario_path: Option<&Path>,
    json: bool,
) -> AppResult<()> {
    let scenario = Scenario::load_or_default(scenario_path)?;
    let model = SucroseModel::new();
    let case = scenario.train.sensitivity_case()?;
    let axis = SweepAxis::new(from, to, points)?;

    let study = optimize_feed_flow(&model, &case, &axis)?;

    let to_row = |p: &FeedCostPoint| OptimizeRow {
        feed_flow_kg_h: p.feed_flow_kg_h,
        invest_eur: p.invest_eur,
        annual_steam_cost_eur: p.annual_steam_cost_eur,
        total_cost_eur: p.total_cost_eur,
    };
    let report = OptimizeReport {
        points: study.points.iter().map(to_row).collect(),
        best: to_row(&study.best),
    };

    if json {
        return print_json(&report);
    }

    println!(
        "Feed-flow cost study: {} points from {:.0} to {:.0} kg/h",
        points, from, to
    );
    println!();
    println!("  Feed [kg/h]   Invest [EUR]   Steam [EUR/a]    Total [EUR]");
    for row in &report.points {
        println!(
            "{:>13.1} {:>14.0} {:>15.0} {:>14.0}",
            row.feed_flow_kg_h, row.invest_eur, row.annual_steam_cost_eur, row.total_cost_eur
        );
    }
    println!();
    println!(
        "✓ Cheapest feed flow: {:.1} kg/h ({:.0} EUR)",
        report.best.feed_flow_kg_h, report.best.total_cost_eur
    );

    Ok(())
}

fn print_json<T: Serialize>(report: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn describe_schedule(schedule: &CoolingSchedule) -> String {
    match *schedule {
        CoolingSchedule::Linear {
            initial_c,
            final_c,
            duration_s,
        } => format!(
            "linear {:.1} -> {:.1} degC over {:.0} s",
            initial_c, final_c, duration_s
        ),
        CoolingSchedule::Exponential {
            initial_c,
            final_c,
            rate_per_s,
        } => format!(
            "exponential {:.1} -> {:.1} degC at {:.2e} 1/s",
            initial_c, final_c, rate_per_s
        ),
    }
}

/// Indices for a decimated table preview: every step-th row plus the last.
fn preview_rows(n: usize) -> Vec<usize> {
    let step = (n.saturating_sub(1) / 10).max(1);
    let mut rows: Vec<usize> = (0..n).step_by(step).collect();
    if n > 0 && rows.last() != Some(&(n - 1)) {
        rows.push(n - 1);
    }
    rows
}
