//! Minimálny parser SMILES zápisu.
//!
//! Zostaví z reťazca molekulový graf (atómy + väzby) bez chemickej
//! interpretácie - valencie, vodíky ani aromaticita sa neoverujú. Slúži len
//! na featurizáciu, takže stačí, aby boli štruktúra zátvoriek, kruhov
//! a symbolov konzistentná.

use std::collections::HashMap;

/// Jednoduchá väzba, ak pred atómom nie je uvedená iná
const DEFAULT_BOND: char = '-';

const BOND_SYMBOLS: [char; 7] = ['-', '=', '#', '$', ':', '/', '\\'];

#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeGraph {
    atoms: Vec<String>,
    adjacency: Vec<Vec<(usize, char)>>,
}

impl MoleculeGraph {
    fn add_atom(&mut self, symbol: String) -> usize {
        self.atoms.push(symbol);
        self.adjacency.push(Vec::new());
        self.atoms.len() - 1
    }

    fn add_bond(&mut self, a: usize, b: usize, bond: char) -> Result<(), String> {
        if a == b {
            return Err(format!("atóm {} je naviazaný sám na seba", a + 1));
        }
        if self.adjacency[a].iter().any(|&(n, _)| n == b) {
            return Err(format!("duplicitná väzba medzi atómami {} a {}", a + 1, b + 1));
        }
        self.adjacency[a].push((b, bond));
        self.adjacency[b].push((a, bond));
        Ok(())
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn num_bonds(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn atom(&self, idx: usize) -> &str {
        &self.atoms[idx]
    }

    /// Susedia atómu spolu so symbolom väzby
    pub fn neighbors(&self, idx: usize) -> &[(usize, char)] {
        &self.adjacency[idx]
    }
}

/// Rozparsuje SMILES reťazec, chyba obsahuje dôvod odmietnutia
pub fn parse(smiles: &str) -> Result<MoleculeGraph, String> {
    let smiles = smiles.trim();
    if smiles.is_empty() {
        return Err("prázdny zápis".to_string());
    }

    let mut graph = MoleculeGraph {
        atoms: Vec::new(),
        adjacency: Vec::new(),
    };
    let mut prev: Option<usize> = None;
    let mut pending_bond: Option<char> = None;
    let mut branches: Vec<usize> = Vec::new();
    let mut rings: HashMap<u32, (usize, Option<char>)> = HashMap::new();

    let mut chars = smiles.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '(' => {
                let anchor = prev.ok_or("vetva bez predchádzajúceho atómu")?;
                if pending_bond.is_some() {
                    return Err("väzba pred otvorením vetvy".to_string());
                }
                branches.push(anchor);
            }
            ')' => {
                if pending_bond.is_some() {
                    return Err("väzba na konci vetvy".to_string());
                }
                prev = Some(branches.pop().ok_or("neotvorená zátvorka")?);
            }
            '.' => {
                if pending_bond.is_some() || prev.is_none() {
                    return Err("nečakaný oddeľovač '.'".to_string());
                }
                prev = None;
            }
            c if BOND_SYMBOLS.contains(&c) => {
                if prev.is_none() {
                    return Err(format!("väzba '{}' bez predchádzajúceho atómu", c));
                }
                if pending_bond.replace(c).is_some() {
                    return Err(format!("dve väzby za sebou pri '{}'", c));
                }
            }
            c if c.is_ascii_digit() || c == '%' => {
                let number = if c == '%' {
                    let digits: String = (0..2).filter_map(|_| chars.next_if(|d| d.is_ascii_digit())).collect();
                    if digits.len() != 2 {
                        return Err("za '%' musia nasledovať dve číslice".to_string());
                    }
                    digits.parse::<u32>().map_err(|e| e.to_string())?
                } else {
                    c.to_digit(10).unwrap_or_default()
                };

                let atom = prev.ok_or("číslo kruhu bez predchádzajúceho atómu")?;
                let bond = pending_bond.take();
                match rings.remove(&number) {
                    Some((other, open_bond)) => {
                        let bond = match (open_bond, bond) {
                            (Some(a), Some(b)) if a != b && a != '/' && a != '\\' => {
                                return Err(format!("nekonzistentná väzba v kruhu {}", number));
                            }
                            (_, Some(b)) => b,
                            (Some(a), None) => a,
                            (None, None) => DEFAULT_BOND,
                        };
                        graph.add_bond(other, atom, bond)?;
                    }
                    None => {
                        rings.insert(number, (atom, bond));
                    }
                }
            }
            '[' => {
                let mut content = String::new();
                loop {
                    match chars.next() {
                        Some(']') => break,
                        Some('[') | None => return Err("neuzavretý hranatý atóm".to_string()),
                        Some(ch) => content.push(ch),
                    }
                }
                if !content.chars().any(|ch| ch.is_ascii_alphabetic() || ch == '*') {
                    return Err(format!("hranatý atóm '[{}]' bez prvku", content));
                }
                let idx = graph.add_atom(format!("[{}]", content));
                connect(&mut graph, &mut prev, &mut pending_bond, idx)?;
            }
            _ => {
                let symbol = match c {
                    'C' if chars.next_if_eq(&'l').is_some() => "Cl".to_string(),
                    'B' if chars.next_if_eq(&'r').is_some() => "Br".to_string(),
                    'B' | 'C' | 'N' | 'O' | 'P' | 'S' | 'F' | 'I' | '*' => c.to_string(),
                    'b' | 'c' | 'n' | 'o' | 'p' | 's' => c.to_string(),
                    _ => return Err(format!("neznámy symbol '{}'", c)),
                };
                let idx = graph.add_atom(symbol);
                connect(&mut graph, &mut prev, &mut pending_bond, idx)?;
            }
        }
    }

    if pending_bond.is_some() {
        return Err("väzba na konci zápisu".to_string());
    }
    if !branches.is_empty() {
        return Err("neuzavretá zátvorka".to_string());
    }
    if let Some(number) = rings.keys().min() {
        return Err(format!("neuzavretý kruh {}", number));
    }
    if graph.num_atoms() == 0 {
        return Err("zápis neobsahuje žiadny atóm".to_string());
    }

    Ok(graph)
}

fn connect(
    graph: &mut MoleculeGraph,
    prev: &mut Option<usize>,
    pending_bond: &mut Option<char>,
    idx: usize,
) -> Result<(), String> {
    let bond = pending_bond.take().unwrap_or(DEFAULT_BOND);
    if let Some(p) = *prev {
        graph.add_bond(p, idx, bond)?;
    }
    *prev = Some(idx);
    Ok(())
}
